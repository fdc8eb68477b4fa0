// src/export/pdf.rs
//! lopdf document writer.

use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::paginate::{PageSize, Placement};
use crate::error::ExportError;

const PT_PER_MM: f32 = 72.0 / 25.4;
const IMAGE_NAME: &str = "Im0";

/// Composes a whole document in memory. Nothing touches the disk here.
pub trait DocumentWriter {
    fn render(&self, image: &RgbaImage, page: PageSize, placements: &[Placement]) -> Result<Vec<u8>, ExportError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PdfWriter;

fn doc_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Document(e.to_string())
}

/// Bytes in an 8-bit RGB buffer of `width` x `height`, widened before multiplying.
pub fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Alpha over white, dropped to RGB.
pub fn flatten_on_white(image: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgb_len(image.width(), image.height()));
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        let a = a as u32;
        for c in [r, g, b] {
            out.push(((c as u32 * a + 255 * (255 - a)) / 255) as u8);
        }
    }
    out
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

impl PdfWriter {
    fn add_image(doc: &mut Document, image: &RgbaImage) -> ObjectId {
        let xobject = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width() as i64,
                "Height" => image.height() as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            },
            flatten_on_white(image),
        );
        doc.add_object(xobject)
    }
}

impl DocumentWriter for PdfWriter {
    fn render(&self, image: &RgbaImage, page: PageSize, placements: &[Placement]) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let image_id = Self::add_image(&mut doc, image);

        let page_w = page.width_mm * PT_PER_MM;
        let page_h = page.height_mm * PT_PER_MM;
        let img_h = super::paginate::scaled_height_mm(image.width(), image.height(), page) * PT_PER_MM;

        let mut kids: Vec<Object> = Vec::with_capacity(placements.len());
        for placement in placements {
            // PDF origin is bottom-left; the image top sits `offset` below the page top
            let y = page_h - img_h - placement.offset_mm * PT_PER_MM;
            let content = Content {
                operations: vec![
                    Operation::new("q", vec![]),
                    Operation::new("cm", vec![real(page_w), real(0.0), real(0.0), real(img_h), real(0.0), real(y)]),
                    Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
                    Operation::new("Q", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().map_err(doc_err)?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![real(0.0), real(0.0), real(page_w), real(page_h)],
                "Resources" => dictionary! {
                    "XObject" => dictionary! { IMAGE_NAME => image_id },
                },
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(doc_err)?;
        Ok(bytes)
    }
}
