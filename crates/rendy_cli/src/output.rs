//! Writing rendered images to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rendy_renderer::{color_to_rgb, ImageBuffer};
use thiserror::Error;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Write a plain-text PPM (`P3`), one `r g b` line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()
}

/// Save `image`, choosing the format from the file extension.
///
/// `.ppm` is written as text; everything else goes through the `image`
/// encoders.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let mut rgb = image::RgbImage::new(image.width, image.height);
        image.resolve_into(&mut rgb);
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendy_renderer::Color;

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::ONE);
        image.set(1, 0, Color::new(0.25, 0.0, 1.0));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut bytes = Vec::new();
        write_ppm(&two_by_one(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n127 0 255\n");
    }

    #[test]
    fn test_save_image_by_extension() {
        let dir = std::env::temp_dir().join(format!("rendy_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let ppm = dir.join("frame.PPM");
        save_image(&two_by_one(), &ppm).unwrap();
        assert!(std::fs::read_to_string(&ppm).unwrap().starts_with("P3\n2 1\n"));

        let png = dir.join("frame.png");
        save_image(&two_by_one(), &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(1, 0).0, [127, 0, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
