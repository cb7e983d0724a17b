use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};
use tracing::debug;

use crate::error::{ExportError, ExportResult};
use crate::export::config::PRODUCT_NAME;
use crate::export::{FitTransform, PdfExportConfig};

// Landscape A4, the page format the original export targeted.
const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;
const PAGE_MARGIN_MM: f32 = 20.0;

/// Places an already-rasterized chart centered on a landscape page,
/// preserving aspect ratio with the same fit logic as the PNG path, and
/// stamps document metadata from the request.
pub(crate) fn compose_page(png_bytes: &[u8], config: &PdfExportConfig) -> ExportResult<Vec<u8>> {
    let mut warnings = Vec::new();
    let image = RawImage::decode_from_bytes(png_bytes, &mut warnings)
        .map_err(|err| ExportError::Load(format!("{err:?}")))?;

    let title = config.title.clone().unwrap_or_else(|| PRODUCT_NAME.to_owned());
    let mut doc = PdfDocument::new(&title);
    doc.metadata.info.document_title = title.clone();
    doc.metadata.info.author = config
        .author
        .clone()
        .unwrap_or_else(|| PRODUCT_NAME.to_owned());
    doc.metadata.info.subject = config
        .subject
        .clone()
        .unwrap_or_else(|| PRODUCT_NAME.to_owned());
    let image_id = doc.add_image(&image);

    // At 72 dpi one pixel is one point, so the fit runs in point space.
    let page_w_pt = f64::from(Mm(PAGE_WIDTH_MM).into_pt().0);
    let page_h_pt = f64::from(Mm(PAGE_HEIGHT_MM).into_pt().0);
    let margin_pt = f64::from(Mm(PAGE_MARGIN_MM).into_pt().0);
    let fit = FitTransform::compute(
        image.width as f64,
        image.height as f64,
        page_w_pt - 2.0 * margin_pt,
        page_h_pt - 2.0 * margin_pt,
    )?;
    let (scaled_w, scaled_h) = fit.scaled_size(image.width as f64, image.height as f64);

    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(((page_w_pt - scaled_w) / 2.0) as f32)),
            translate_y: Some(Pt(((page_h_pt - scaled_h) / 2.0) as f32)),
            scale_x: Some(fit.scale as f32),
            scale_y: Some(fit.scale as f32),
            dpi: Some(72.0),
            ..Default::default()
        },
    }];
    let page = PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops);

    let bytes = doc
        .with_pages(vec![page])
        .save(&PdfSaveOptions::default(), &mut warnings);
    debug!(
        bytes = bytes.len(),
        warnings = warnings.len(),
        "pdf page composed"
    );
    Ok(bytes)
}
