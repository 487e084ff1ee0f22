//! Visitor code generation and QR badge rendering

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;

use crate::{
    config::BadgeConfig,
    error::{AppError, AppResult},
};

/// Payload embedded in the QR badge, scanned at the security desk
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BadgePayload<'a> {
    visitor_id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
}

#[derive(Clone)]
pub struct BadgeService {
    config: BadgeConfig,
}

impl BadgeService {
    pub fn new(config: BadgeConfig) -> Self {
        Self { config }
    }

    /// Generate a visitor code: VIS prefix, millisecond timestamp, 9 random
    /// uppercase alphanumeric characters. Uniqueness is not probed here; the
    /// database constraint is the backstop.
    pub fn generate_visitor_code(&self) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(char::from)
            .collect();
        format!("VIS{}{}", Utc::now().timestamp_millis(), suffix.to_uppercase())
    }

    /// Render the QR badge as a PNG data URI
    pub fn render_badge(
        &self,
        visitor_id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> AppResult<String> {
        let payload = serde_json::to_string(&BadgePayload {
            visitor_id,
            name,
            email,
            phone,
        })
        .map_err(|e| AppError::Internal(format!("Failed to encode badge payload: {}", e)))?;

        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| AppError::Internal(format!("Failed to build QR code: {}", e)))?;

        let colors = code.to_colors();
        let modules = code.width() as u32;
        let total = modules + 2 * self.config.margin;
        // Scale modules up to approach the configured width
        let scale = (self.config.width / total).max(1);
        let size = total * scale;

        let mut img = GrayImage::from_pixel(size, size, Luma([255u8]));
        for y in 0..modules {
            for x in 0..modules {
                if colors[(y * modules + x) as usize] == Color::Dark {
                    for dy in 0..scale {
                        for dx in 0..scale {
                            img.put_pixel(
                                (self.config.margin + x) * scale + dx,
                                (self.config.margin + y) * scale + dy,
                                Luma([0u8]),
                            );
                        }
                    }
                }
            }
        }

        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| AppError::Internal(format!("Failed to encode badge image: {}", e)))?;

        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn service() -> BadgeService {
        BadgeService::new(BadgeConfig::default())
    }

    #[test]
    fn visitor_code_has_expected_shape() {
        let code = service().generate_visitor_code();
        let pattern = Regex::new(r"^VIS\d{13}[A-Z0-9]{9}$").unwrap();
        assert!(pattern.is_match(&code), "unexpected code: {}", code);
    }

    #[test]
    fn visitor_codes_differ() {
        let svc = service();
        let a = svc.generate_visitor_code();
        let b = svc.generate_visitor_code();
        assert_ne!(a, b);
    }

    #[test]
    fn badge_payload_uses_camel_case_keys() {
        let payload = BadgePayload {
            visitor_id: "VIS1700000000000ABCDEF123",
            name: "Jane Doe",
            email: "jane@example.com",
            phone: "+1-555-0100",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["visitorId"], "VIS1700000000000ABCDEF123");
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["phone"], "+1-555-0100");
    }

    #[test]
    fn badge_is_a_png_data_uri() {
        let uri = service()
            .render_badge("VIS1700000000000ABCDEF123", "Jane Doe", "jane@example.com", "+1-555-0100")
            .unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        let png = STANDARD.decode(encoded).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn badge_dimensions_follow_config() {
        let svc = BadgeService::new(BadgeConfig { width: 300, margin: 2 });
        let uri = svc
            .render_badge("VIS1700000000000ABCDEF123", "Jane Doe", "jane@example.com", "+1-555-0100")
            .unwrap();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        let png = STANDARD.decode(encoded).unwrap();

        let img = image::load_from_memory(&png).unwrap();
        // Square image, never larger than the configured width unless a
        // single scale step already exceeds it
        assert_eq!(img.width(), img.height());
        assert!(img.width() <= 300 || img.width() < 300 + img.width() / 2);
    }
}
