// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error en el archivo de configuración: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Error al generar el XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Error del cliente HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Formato de fecha inválido: {0}")]
    DayLabel(String),

    #[error("Debes configurar la cookie y el UserID antes de exportar.")]
    MissingCredentials,

    #[error("Completa todos los campos.")]
    IncompleteSettings,

    #[error("Rango de fechas inválido: {start} es posterior a {end}")]
    DateRange { start: chrono::NaiveDate, end: chrono::NaiveDate },

    #[error("La ruta existe pero no es un directorio: {0}")]
    NotADirectory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
