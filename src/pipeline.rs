use crate::labels::format_match_label;
use crate::phases::PhaseIndex;
use crate::sets::extract_match_record;
use crate::types::PageResult;
use tracing::{debug, info};

/// Source of paged set data for an event.
pub trait PageFetcher {
    fn fetch_page(&self, event_slug: &str, page: u32) -> Result<PageResult, String>;
}

/// Notified before every page fetch. Purely observational.
pub trait Progress {
    fn on_page(&mut self, current_page: u32, total_pages: u32, event_slug: &str);
}

impl<F> Progress for F
where
    F: FnMut(u32, u32, &str),
{
    fn on_page(&mut self, current_page: u32, total_pages: u32, event_slug: &str) {
        self(current_page, total_pages, event_slug)
    }
}

/// Walks every page of sets for the event and returns one label per streamed set,
/// in page order. Any fetch failure aborts the run with no partial output.
///
/// The total page count is taken from the first response only.
pub fn collect_stream_labels<P: PageFetcher + ?Sized>(
    fetcher: &P,
    event_slug: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>, String> {
    let mut labels = Vec::new();
    let mut phases = PhaseIndex::default();
    let mut page = 1u32;
    let mut total_pages = 1u32;

    loop {
        if let Some(progress) = progress.as_deref_mut() {
            progress.on_page(page, total_pages, event_slug);
        }
        info!("Fetching page {page}/{total_pages} of sets for event: {event_slug}");

        let result = fetcher.fetch_page(event_slug, page)?;
        if page == 1 {
            phases = PhaseIndex::new(&result.phases);
            total_pages = result.total_pages;
            debug!(
                phases = result.phases.len(),
                total_pages,
                "phase index built from first page"
            );
        }

        for set in &result.sets {
            match extract_match_record(set, &phases) {
                Some(record) => labels.push(format_match_label(&record)),
                None => debug!(set_id = ?set.id, "skipping set"),
            }
        }

        page += 1;
        if page > total_pages {
            break;
        }
    }

    info!("Collected {} streamed sets for {event_slug}", labels.len());
    Ok(labels)
}
