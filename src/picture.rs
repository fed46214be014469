//! Picture loading and conversion for embedded images.
//!
//! Raster files are decoded with the `image` crate and re-wrapped as a
//! Windows Metafile (a `META_STRETCHDIB` record carrying a 24-bit bottom-up
//! DIB), the payload format of an RTF `\pict\wmetafile8` block. The metafile
//! bytes are hex-encoded into the document by the writer.

use image::RgbImage;

/// Assumed render resolution when converting pixels to himetric units.
const DPI: u32 = 96;

/// Himetric units (hundredths of a millimeter) per inch.
const HIMETRIC_PER_INCH: u32 = 2540;

/// WMF record function codes (MS-WMF §2.3).
mod record {
    pub const SET_MAP_MODE: u16 = 0x0103;
    pub const SET_WINDOW_ORG: u16 = 0x020B;
    pub const SET_WINDOW_EXT: u16 = 0x020C;
    pub const STRETCH_DIB: u16 = 0x0F43;
    pub const EOF: u16 = 0x0000;
}

/// MM_ANISOTROPIC mapping mode.
const MM_ANISOTROPIC: u16 = 8;

/// SRCCOPY ternary raster operation.
const SRCCOPY: u32 = 0x00CC_0020;

/// File extensions accepted by the image embedder.
const SUPPORTED_EXTENSIONS: [&str; 3] = [".bmp", ".jpg", ".gif"];

/// Check the embedder's extension allow-list.
///
/// A case-sensitive substring check, so `photo.jpg.bak` passes; misses are
/// reported into the document as a soft failure, never as an error.
pub(crate) fn has_supported_extension(path: &str) -> bool {
    SUPPORTED_EXTENSIONS.iter().any(|ext| path.contains(ext))
}

/// A decoded picture held by the session until replaced or the session
/// closes.
#[derive(Debug, Clone)]
pub struct Picture {
    width: u32,
    height: u32,
    metafile: Vec<u8>,
}

impl Picture {
    /// Decode raw image file bytes into a metafile-wrapped picture.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = decoded.dimensions();
        let metafile = build_metafile(&decoded);
        Ok(Self {
            width,
            height,
            metafile,
        })
    }

    /// Native width in himetric units (hundredths of a millimeter).
    #[inline]
    pub fn himetric_width(&self) -> i32 {
        pixels_to_himetric(self.width)
    }

    /// Native height in himetric units (hundredths of a millimeter).
    #[inline]
    pub fn himetric_height(&self) -> i32 {
        pixels_to_himetric(self.height)
    }

    /// The metafile bytes embedded in the `\pict` block.
    #[inline]
    pub fn metafile(&self) -> &[u8] {
        &self.metafile
    }
}

#[inline]
fn pixels_to_himetric(pixels: u32) -> i32 {
    (u64::from(pixels) * u64::from(HIMETRIC_PER_INCH) / u64::from(DPI)) as i32
}

/// Convert binary data to lowercase hexadecimal, two characters per byte.
pub(crate) fn bin_hex_convert(binary: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(binary.len() * 2);
    for &byte in binary {
        out.push(HEX[usize::from(byte >> 4)] as char);
        out.push(HEX[usize::from(byte & 0x0F)] as char);
    }
    out
}

#[inline]
fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[inline]
fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append a WMF record with 16-bit parameters.
fn push_record(out: &mut Vec<u8>, function: u16, params: &[u16]) {
    push_u32(out, 3 + params.len() as u32);
    push_u16(out, function);
    for &param in params {
        push_u16(out, param);
    }
}

/// Serialize the pixels as a 24-bit bottom-up DIB (BITMAPINFOHEADER plus
/// padded BGR rows, no file header).
fn build_dib(image: &RgbImage) -> Vec<u8> {
    let (width, height) = image.dimensions();
    let stride = ((width * 3) + 3) & !3;
    let image_size = stride * height;

    let mut dib = Vec::with_capacity(40 + image_size as usize);
    push_u32(&mut dib, 40); // biSize
    push_u32(&mut dib, width);
    push_u32(&mut dib, height); // positive height: bottom-up rows
    push_u16(&mut dib, 1); // biPlanes
    push_u16(&mut dib, 24); // biBitCount
    push_u32(&mut dib, 0); // BI_RGB
    push_u32(&mut dib, image_size);
    push_u32(&mut dib, 0); // biXPelsPerMeter
    push_u32(&mut dib, 0); // biYPelsPerMeter
    push_u32(&mut dib, 0); // biClrUsed
    push_u32(&mut dib, 0); // biClrImportant

    for y in (0..height).rev() {
        let row_start = dib.len();
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            dib.push(pixel[2]);
            dib.push(pixel[1]);
            dib.push(pixel[0]);
        }
        while dib.len() - row_start < stride as usize {
            dib.push(0);
        }
    }

    dib
}

/// Wrap the pixels in a memory metafile: map mode, window origin/extent,
/// one `META_STRETCHDIB` blit of the whole image, and the end-of-file
/// record.
fn build_metafile(image: &RgbImage) -> Vec<u8> {
    let (width, height) = image.dimensions();
    let dib = build_dib(image);
    let dib_words = (dib.len() / 2) as u32;
    let stretch_words = 3 + 11 + dib_words;
    // header + map mode + origin + extent + blit + EOF
    let total_words = 9 + 4 + 5 + 5 + stretch_words + 3;

    let mut wmf = Vec::with_capacity(total_words as usize * 2);

    // Standard WMF header, nine 16-bit words.
    push_u16(&mut wmf, 1); // memory metafile
    push_u16(&mut wmf, 9); // header size in words
    push_u16(&mut wmf, 0x0300); // version
    push_u32(&mut wmf, total_words);
    push_u16(&mut wmf, 0); // object count
    push_u32(&mut wmf, stretch_words); // largest record in words
    push_u16(&mut wmf, 0); // parameter count, always zero

    push_record(&mut wmf, record::SET_MAP_MODE, &[MM_ANISOTROPIC]);
    push_record(&mut wmf, record::SET_WINDOW_ORG, &[0, 0]);
    push_record(&mut wmf, record::SET_WINDOW_EXT, &[height as u16, width as u16]);

    // META_STRETCHDIB: rop, color usage, source and destination rectangles,
    // then the DIB itself.
    push_u32(&mut wmf, stretch_words);
    push_u16(&mut wmf, record::STRETCH_DIB);
    push_u32(&mut wmf, SRCCOPY);
    push_u16(&mut wmf, 0); // DIB_RGB_COLORS
    push_u16(&mut wmf, height as u16); // srcHeight
    push_u16(&mut wmf, width as u16); // srcWidth
    push_u16(&mut wmf, 0); // ySrc
    push_u16(&mut wmf, 0); // xSrc
    push_u16(&mut wmf, height as u16); // destHeight
    push_u16(&mut wmf, width as u16); // destWidth
    push_u16(&mut wmf, 0); // yDst
    push_u16(&mut wmf, 0); // xDst
    wmf.extend_from_slice(&dib);

    push_record(&mut wmf, record::EOF, &[]);

    wmf
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extension_allow_list() {
        assert!(has_supported_extension("chart.bmp"));
        assert!(has_supported_extension("photo.jpg"));
        assert!(has_supported_extension("anim.gif"));
        assert!(has_supported_extension("backup/photo.jpg.old"));
        assert!(!has_supported_extension("picture.png"));
        assert!(!has_supported_extension("PHOTO.JPG"));
    }

    #[test]
    fn hex_conversion_is_lowercase() {
        assert_eq!(bin_hex_convert(&[0x00, 0x0A, 0xFF, 0x9C]), "000aff9c");
        assert_eq!(bin_hex_convert(&[]), "");
    }

    proptest! {
        #[test]
        fn hex_conversion_shape(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let hex = bin_hex_convert(&data);
            prop_assert_eq!(hex.len(), data.len() * 2);
            prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }

    fn checker(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([255, 255, 255])
            } else {
                image::Rgb([0, 0, 128])
            }
        })
    }

    #[test]
    fn metafile_header_layout() {
        let wmf = build_metafile(&checker(3, 2));
        // memory metafile, header size 9, version 0x0300
        assert_eq!(&wmf[0..6], &[0x01, 0x00, 0x09, 0x00, 0x00, 0x03]);
        let total_words = u32::from_le_bytes([wmf[6], wmf[7], wmf[8], wmf[9]]);
        assert_eq!(total_words as usize * 2, wmf.len());
        // ends with the EOF record
        assert_eq!(&wmf[wmf.len() - 6..], &[0x03, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn dib_rows_are_padded_and_bottom_up() {
        let dib = build_dib(&checker(3, 2));
        // 3px * 3 bytes = 9, padded to 12 per row
        assert_eq!(dib.len(), 40 + 2 * 12);
        let width = u32::from_le_bytes([dib[4], dib[5], dib[6], dib[7]]);
        assert_eq!(width, 3);
        // bottom row first: pixel (0,1) is dark blue, stored BGR
        assert_eq!(&dib[40..43], &[128, 0, 0]);
        // top row second: pixel (0,0) is white
        assert_eq!(&dib[52..55], &[255, 255, 255]);
    }

    #[test]
    fn himetric_dimensions() {
        let mut png = Vec::new();
        let img = checker(96, 48);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let picture = Picture::from_bytes(&png).unwrap();
        assert_eq!(picture.himetric_width(), 2540);
        assert_eq!(picture.himetric_height(), 1270);
        assert!(!picture.metafile().is_empty());
    }
}
