//! Current-page bookkeeping for the paginated list.
//!
//! Every event funnels through [`Pager::apply`], which ends with one clamp
//! into `[1, max(total_pages, 1)]`. Filter switches, data changes, direct
//! jumps and arrow-key steps all share that clamp.

use tracing::debug;

const BOUNDARY_COUNT: i64 = 1;
const SIBLING_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The active filter switched to a different one.
    FilterChanged,
    /// The task collection changed.
    DataChanged,
    Jump(usize),
    Step(PageStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Pager {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Applies `event` and returns the resulting page.
    pub fn apply(&mut self, event: PageEvent, total_pages: usize) -> usize {
        let before = self.page;
        let proposed = match event {
            PageEvent::FilterChanged => 1,
            PageEvent::DataChanged => self.page,
            PageEvent::Jump(page) => page,
            PageEvent::Step(PageStep::Previous) => self.page.saturating_sub(1),
            PageEvent::Step(PageStep::Next) if self.page < total_pages => self.page + 1,
            PageEvent::Step(PageStep::Next) => self.page,
        };
        self.page = clamp_page(proposed, total_pages);

        if self.page != before {
            debug!(?event, before, after = self.page, total_pages, "page changed");
        }
        self.page
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Numbered entries of the pagination control: the first and last page,
/// the current page with one neighbour on each side, and `Gap` markers for
/// the collapsed runs in between.
pub fn page_links(page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let count = total_pages as i64;
    let page = clamp_page(page, total_pages) as i64;

    let start_end = BOUNDARY_COUNT.min(count);
    let end_start = (count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1);
    let has_end = end_start <= count;

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(if has_end { end_start - 2 } else { count - 1 });

    let mut links: Vec<PageLink> = (1..=start_end).map(|p| PageLink::Page(p as usize)).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        links.push(PageLink::Gap);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        links.push(PageLink::Page((BOUNDARY_COUNT + 1) as usize));
    }

    links.extend((siblings_start..=siblings_end).map(|p| PageLink::Page(p as usize)));

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        links.push(PageLink::Gap);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        links.push(PageLink::Page((count - BOUNDARY_COUNT) as usize));
    }

    if has_end {
        links.extend((end_start..=count).map(|p| PageLink::Page(p as usize)));
    }

    links
}
