//! ASCII PPM (`P3`) output.

use crate::{color_to_rgb, ImageBuffer, RenderResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `image` as a tonemapped ASCII PPM, one `r g b` line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> RenderResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save `image` to `path` as an ASCII PPM.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}
