/// A page section as laid out at measurement time.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, offset: f64, lookahead: f64) -> bool {
        let start = self.top - lookahead;
        offset >= start && offset < start + self.height
    }
}

/// Id of the section in view at `offset`.
///
/// Sections are scanned in document order and the last one whose shifted
/// range contains the offset wins, so overlapping sections resolve to the
/// later one.
// TODO: nested sections (a card grid inside a section) would highlight the
// inner one; switch to first match if that layout ships.
pub fn current_section(sections: &[Section], offset: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(offset, lookahead))
        .last()
        .map(|section| section.id.as_str())
}

/// Navigation link state, keyed by the section id it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub(in crate::app) entries: Vec<NavEntry>,
    /// Set once the page's link classes have been written at least once.
    synced: bool,
}

impl NavState {
    /// Build entries from link `href`s; only in-page anchors participate.
    pub(in crate::app) fn from_links(links: &[String]) -> Self {
        let entries = links
            .iter()
            .filter_map(|href| href.strip_prefix('#'))
            .filter(|target| !target.is_empty())
            .map(|target| NavEntry {
                target: target.to_string(),
                active: false,
            })
            .collect();
        Self {
            entries,
            synced: false,
        }
    }

    /// Mark the entry for `current` active and every other one inactive.
    /// Returns whether the page needs restyling: always on the first call,
    /// afterwards only when a flag changed.
    pub(in crate::app) fn apply(&mut self, current: Option<&str>) -> bool {
        let mut changed = !self.synced;
        self.synced = true;
        let mut claimed = false;
        for entry in &mut self.entries {
            let active = !claimed && current == Some(entry.target.as_str());
            claimed |= active;
            if entry.active != active {
                entry.active = active;
                changed = true;
            }
        }
        changed
    }

    pub(in crate::app) fn active(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sections() -> Vec<Section> {
        vec![Section::new("a", 0.0, 500.0), Section::new("b", 500.0, 500.0)]
    }

    #[test]
    fn offset_inside_second_section_selects_it() {
        assert_eq!(current_section(&two_sections(), 600.0, 100.0), Some("b"));
    }

    #[test]
    fn lookahead_shifts_boundaries_up() {
        let sections = two_sections();
        assert_eq!(current_section(&sections, 399.0, 100.0), Some("a"));
        assert_eq!(current_section(&sections, 400.0, 100.0), Some("b"));
        assert_eq!(current_section(&sections, 899.0, 100.0), Some("b"));
        assert_eq!(current_section(&sections, 900.0, 100.0), None);
    }

    #[test]
    fn offset_above_first_section_range_matches_nothing() {
        let sections = vec![Section::new("hero", 300.0, 200.0)];
        assert_eq!(current_section(&sections, 100.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let sections = vec![
            Section::new("outer", 0.0, 1000.0),
            Section::new("inner", 200.0, 200.0),
        ];
        assert_eq!(current_section(&sections, 250.0, 100.0), Some("inner"));
        assert_eq!(current_section(&sections, 700.0, 100.0), Some("outer"));
    }

    #[test]
    fn at_most_one_entry_is_active_for_any_offset() {
        let links = vec![
            "#a".to_string(),
            "#b".to_string(),
            "#b".to_string(),
            "#c".to_string(),
        ];
        let sections = vec![
            Section::new("a", 0.0, 500.0),
            Section::new("b", 450.0, 500.0),
            Section::new("c", 900.0, 300.0),
        ];
        let mut nav = NavState::from_links(&links);
        for offset in (0..1400).step_by(25) {
            nav.apply(current_section(&sections, offset as f64, 100.0));
            let active = nav.entries.iter().filter(|e| e.active).count();
            assert!(active <= 1, "offset {offset} left {active} entries active");
        }
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut nav = NavState::from_links(&["#a".to_string(), "#b".to_string()]);
        assert!(nav.apply(Some("b")));
        assert_eq!(nav.active(), Some("b"));
        assert!(!nav.apply(Some("b")));
        assert!(nav.apply(None));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn only_in_page_anchors_become_entries() {
        let links = vec![
            "about".to_string(),
            "#".to_string(),
            "https://example.org/#about".to_string(),
            "#blog".to_string(),
        ];
        let nav = NavState::from_links(&links);
        let targets: Vec<&str> = nav.entries.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["blog"]);
    }

    #[test]
    fn first_apply_reports_even_without_a_match() {
        let mut nav = NavState::from_links(&["#a".to_string()]);
        assert!(nav.apply(None));
        assert!(!nav.apply(None));
    }

    #[test]
    fn unknown_section_leaves_nothing_active() {
        let mut nav = NavState::from_links(&["#a".to_string()]);
        nav.apply(Some("a"));
        nav.apply(Some("zzz"));
        assert_eq!(nav.active(), None);
    }
}
