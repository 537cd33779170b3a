use crate::types::StudyGroup;

const GROUP_MARKERS: [(&str, StudyGroup); 4] = [
    ("Group A", StudyGroup::A),
    ("Group B", StudyGroup::B),
    ("Group C", StudyGroup::C),
    ("Group D", StudyGroup::D),
];

/// Extracts the collection group from an image's storage path
///
/// Images are delivered in per-group folders such as `.../Group B/...`;
/// the first marker found wins.
pub fn extract_group(path: &str) -> Option<StudyGroup> {
    GROUP_MARKERS
        .iter()
        .find(|(marker, _)| path.contains(marker))
        .map(|(_, group)| *group)
}
