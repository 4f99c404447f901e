use std::io;
use nmt_utils::error::UtilsError;

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let utils_err = UtilsError::io_with_path(io_err, "missing.toml");

    match utils_err {
        UtilsError::Io {
            source,
            path: Some(p),
        } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
            assert_eq!(p, "missing.toml");
        }
        other => panic!("Ожидался UtilsError::Io с путем, получено {other:?}"),
    }

    let io_err_no_path = io::Error::new(io::ErrorKind::Other, "other io error");
    let utils_err_no_path: UtilsError = io_err_no_path.into(); // Используем From<std::io::Error>
    assert!(matches!(utils_err_no_path, UtilsError::Io { path: None, .. }));
}

#[test]
fn test_config_error_formatting() {
    let err = UtilsError::Config("bad level".to_string());
    assert_eq!(err.to_string(), "Ошибка конфигурации: bad level");
}

#[test]
fn test_generic_error_formatting() {
    let err = UtilsError::Generic("что-то пошло не так".to_string());
    assert_eq!(
        err.to_string(),
        "Произошла общая ошибка утилиты: что-то пошло не так"
    );
}

#[test]
fn test_io_error_from_keeps_source_without_path() {
    fn read_missing() -> Result<(), UtilsError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
        Ok(())
    }

    match read_missing() {
        Err(UtilsError::Io { source, path }) => {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            assert!(path.is_none());
        }
        other => panic!("Ожидался UtilsError::Io без пути, получено {other:?}"),
    }
}
