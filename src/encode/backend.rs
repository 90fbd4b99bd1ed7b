//! Encoder contract and codec registry.
//!
//! The [`Encoder`] trait is the only operation the corpus driver needs:
//! serialize one pixel buffer into one container format, in memory. The
//! production implementation is [`RustEncoder`](super::rust_encoder) — pure
//! Rust, statically linked. Tests use the recording [`tests::MockEncoder`].

use crate::catalog::ContainerFormat;
use crate::raster::PixelBuffer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    /// No codec is available for the container. Permanent for HEIC, which
    /// has no pure-Rust encoder.
    #[error("no encoder available for {0}")]
    UnsupportedFormat(ContainerFormat),
    /// The codec rejected the buffer or failed mid-encode.
    #[error("encoding failed: {0}")]
    Codec(String),
}

/// Registry mapping each container format to the identifier of the codec
/// that carries it, in MIME form.
pub fn codec_identifier(format: ContainerFormat) -> &'static str {
    match format {
        ContainerFormat::Png => "image/png",
        ContainerFormat::Jpeg => "image/jpeg",
        ContainerFormat::Tiff => "image/tiff",
        ContainerFormat::Bmp => "image/bmp",
        ContainerFormat::Gif => "image/gif",
        ContainerFormat::Heic => "image/heic",
    }
}

/// Serialize pixel buffers into container bytes.
///
/// Implementations never touch the filesystem — the driver owns all writes,
/// so encode failures and write failures stay distinguishable.
pub trait Encoder {
    fn encode(&self, buffer: &PixelBuffer, format: ContainerFormat) -> Result<Vec<u8>, EncodeError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::catalog::BufferLayout;
    use crate::raster::create_buffer;
    use std::sync::Mutex;

    /// Mock encoder that records every request and returns canned bytes.
    /// Can be primed to fail for chosen container formats.
    #[derive(Default)]
    pub struct MockEncoder {
        pub operations: Mutex<Vec<(String, ContainerFormat)>>,
        pub fail_formats: Vec<ContainerFormat>,
    }

    impl MockEncoder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_for(formats: Vec<ContainerFormat>) -> Self {
            Self {
                operations: Mutex::new(Vec::new()),
                fail_formats: formats,
            }
        }

        pub fn recorded(&self) -> Vec<(String, ContainerFormat)> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl Encoder for MockEncoder {
        fn encode(
            &self,
            buffer: &PixelBuffer,
            format: ContainerFormat,
        ) -> Result<Vec<u8>, EncodeError> {
            self.operations
                .lock()
                .unwrap()
                .push((buffer.layout().name().to_string(), format));

            if self.fail_formats.contains(&format) {
                return Err(EncodeError::Codec("mock failure".to_string()));
            }
            Ok(format.extension().as_bytes().to_vec())
        }
    }

    #[test]
    fn mock_records_requests_in_order() {
        let mock = MockEncoder::new();
        let buf = create_buffer(BufferLayout::StandardRgb, 2, 2).unwrap();

        mock.encode(&buf, ContainerFormat::Png).unwrap();
        mock.encode(&buf, ContainerFormat::Gif).unwrap();

        assert_eq!(
            mock.recorded(),
            vec![
                ("StandardRGB".to_string(), ContainerFormat::Png),
                ("StandardRGB".to_string(), ContainerFormat::Gif),
            ]
        );
    }

    #[test]
    fn mock_fails_only_for_primed_formats() {
        let mock = MockEncoder::failing_for(vec![ContainerFormat::Tiff]);
        let buf = create_buffer(BufferLayout::Grayscale, 2, 2).unwrap();

        assert!(mock.encode(&buf, ContainerFormat::Png).is_ok());
        assert!(matches!(
            mock.encode(&buf, ContainerFormat::Tiff),
            Err(EncodeError::Codec(_))
        ));
    }

    #[test]
    fn registry_is_total_over_the_container_enum() {
        for format in ContainerFormat::ALL {
            assert!(codec_identifier(format).starts_with("image/"));
        }
    }
}
