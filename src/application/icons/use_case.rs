//! Icon Build Use Case
//!
//! Orchestrates face selection, rendering and encoding.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use image::RgbaImage;

use crate::domain::entities::IconSpec;
use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::error::{AssetError, AssetResult};
use crate::infrastructure::fs::write_atomic;
use crate::infrastructure::icons::{encode_ico, encode_png, render_icon, LabelFace};

use super::options::IconOutputs;
use super::result::{IconFormat, IconReport, WrittenIcon};

/// Icon build use case
#[derive(Debug, Default)]
pub struct IconBuildUseCase;

impl IconBuildUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Render every size of `spec` and write the PNG and ICO outputs.
    ///
    /// `fonts` is tried in order; when none loads the built-in bitmap face
    /// draws the label.
    pub fn execute(
        &self,
        spec: &IconSpec,
        outputs: &IconOutputs,
        fonts: &[PathBuf],
        event_sink: Arc<dyn BuildEventSink>,
    ) -> AssetResult<IconReport> {
        spec.validate()?;
        let png_size = spec
            .png_size()
            .ok_or_else(|| AssetError::InvalidIconSpec("no sizes configured".into()))?;
        let ico_sizes = spec.ico_sizes();

        event_sink.on_event(BuildEvent::Started {
            command: "icons",
            total: spec.sizes.len(),
            output: outputs.png.clone(),
        });

        let face = LabelFace::load_first(fonts);
        let detailed = event_sink.wants_detailed_events();

        let mut rendered: BTreeMap<u32, RgbaImage> = BTreeMap::new();
        for &size in &spec.sizes {
            if rendered.contains_key(&size) {
                continue;
            }
            rendered.insert(size, render_icon(spec, &face, size));
            if detailed {
                event_sink.on_event(BuildEvent::IconRendered { size });
            }
        }

        let mut report = IconReport {
            face: face.describe(),
            files: Vec::new(),
        };

        let largest = rendered
            .get(&png_size)
            .ok_or_else(|| AssetError::InvalidIconSpec(format!("size {} not rendered", png_size)))?;
        let png = encode_png(largest)?;
        write_atomic(&outputs.png, &png)?;
        self.record(
            &mut report,
            event_sink.as_ref(),
            WrittenIcon {
                path: outputs.png.clone(),
                format: IconFormat::Png,
                sizes: vec![png_size],
            },
        );

        if !outputs.ico.is_empty() {
            let frames: Vec<&RgbaImage> = ico_sizes
                .iter()
                .filter_map(|size| rendered.get(size))
                .collect();
            let ico = encode_ico(&frames)?;
            for path in &outputs.ico {
                write_atomic(path, &ico)?;
                self.record(
                    &mut report,
                    event_sink.as_ref(),
                    WrittenIcon {
                        path: path.clone(),
                        format: IconFormat::Ico,
                        sizes: ico_sizes.clone(),
                    },
                );
            }
        }

        event_sink.on_event(BuildEvent::Completed {
            command: "icons",
            succeeded: report.file_count(),
            failed: 0,
            skipped: 0,
        });

        Ok(report)
    }

    fn record(&self, report: &mut IconReport, event_sink: &dyn BuildEventSink, icon: WrittenIcon) {
        event_sink.on_event(BuildEvent::IconWritten {
            path: icon.path.clone(),
            format: icon.format.as_str(),
            sizes: icon.sizes.clone(),
        });
        report.files.push(icon);
    }
}
