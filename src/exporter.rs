// src/exporter.rs
//! Fans a custom media mapping out to every destination at once.

use crate::destination::{normalize, Destination, NormalizedDestination};
use crate::error::ExportError;
use crate::output::{deliver_file, Delivery, ExportReport};
use crate::types::CustomMediaMap;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Exports `custom_media` to every destination concurrently.
///
/// Each destination runs as its own task. The batch succeeds only when all
/// of them do; otherwise the first error to arrive is returned. Tasks still
/// in flight at that point are not cancelled and may go on to write.
///
/// Must be called from within a tokio runtime.
pub async fn export_custom_media<I, D>(
    custom_media: &CustomMediaMap,
    destinations: I,
) -> Result<ExportReport, ExportError>
where
    I: IntoIterator<Item = D>,
    D: Into<Destination>,
{
    let start_time = Instant::now();
    let custom_media = Arc::new(custom_media.clone());
    let normalized: Vec<NormalizedDestination> = destinations
        .into_iter()
        .map(|destination| normalize(destination.into()))
        .collect();

    log::info!(
        "Exporting {} custom media definitions to {} destinations",
        custom_media.len(),
        normalized.len()
    );

    let mut deliveries: Vec<Option<Delivery>> = vec![None; normalized.len()];
    let mut pending: FuturesUnordered<_> = normalized
        .into_iter()
        .enumerate()
        .map(|(index, destination)| {
            log::debug!("Destination {}: {:?}", index, destination);
            let custom_media = Arc::clone(&custom_media);
            let task = tokio::spawn(async move { export_to(&custom_media, destination).await });
            async move { (index, task.await) }
        })
        .collect();

    // Returning early drops the join handles, which detaches the tasks
    // rather than aborting them.
    while let Some((index, joined)) = pending.next().await {
        let delivery = joined
            .map_err(ExportError::from)
            .and_then(|outcome| outcome)
            .inspect_err(|e| {
                log::error!("Destination {} failed: {}", index, e);
            })?;
        deliveries[index] = Some(delivery);
    }

    let mut report = deliveries
        .into_iter()
        .flatten()
        .fold(ExportReport::new(), ExportReport::with_delivery);
    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Export complete: {} files, {} objects, {} callbacks, {} skipped in {}ms",
        report.stats.files_written,
        report.stats.objects_updated,
        report.stats.callbacks_invoked,
        report.stats.skipped,
        report.stats.total_duration_ms
    );

    Ok(report)
}

/// Transforms the mapping for one destination and hands it over.
async fn export_to(
    custom_media: &CustomMediaMap,
    destination: NormalizedDestination,
) -> Result<Delivery, ExportError> {
    let rendered = destination.render(custom_media);
    let entries = rendered.len();

    match destination {
        NormalizedDestination::Callback { callback, .. } => {
            callback
                .receive(rendered)
                .await
                .map_err(ExportError::Callback)?;
            Ok(Delivery::Callback { entries })
        }
        NormalizedDestination::Object { record, field, .. } => {
            *record.lock().slot_mut(field) = Some(rendered);
            log::debug!("Updated in-memory '{}' with {} entries", field, entries);
            Ok(Delivery::Object { field, entries })
        }
        NormalizedDestination::File { path, kind, .. } => {
            deliver_file(&path, &kind, &rendered).await
        }
    }
}
