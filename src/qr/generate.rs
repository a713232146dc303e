//! Drives the external QR matrix encoder.

use qrcode::{types::Color, EcLevel, QrCode};
use snafu::ResultExt;

use super::error::{EncodeSnafu, QrError};

pub struct Matrix {
    pub width: usize,
    pub colors: Vec<Color>,
}

impl Matrix {
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.colors[y * self.width + x] == Color::Dark
    }
}

pub fn generate(payload: &str, level: EcLevel) -> Result<Matrix, QrError> {
    let code =
        QrCode::with_error_correction_level(payload.as_bytes(), level).context(EncodeSnafu)?;
    let width = code.width();
    let colors = code.to_colors();
    Ok(Matrix { width, colors })
}
