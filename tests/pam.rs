extern crate recodr;

use recodr::pam::{scan, PamOrientation};

#[test]
fn test_scan_reports_both_orientations() {
    let window = b"ACCGGTAAGGCCCTCGG";
    let candidates = scan(window);

    let ngg: Vec<_> = candidates
        .iter()
        .filter(|c| c.orientation == PamOrientation::Ngg)
        .collect();
    let ccn: Vec<_> = candidates
        .iter()
        .filter(|c| c.orientation == PamOrientation::Ccn)
        .collect();

    assert_eq!(
        ngg.iter()
            .map(|c| (c.window_offset, c.motif_str()))
            .collect::<Vec<_>>(),
        vec![(2, "CGG".into()), (7, "AGG".into()), (14, "CGG".into())]
    );
    assert_eq!(
        ccn.iter()
            .map(|c| (c.window_offset, c.motif_str()))
            .collect::<Vec<_>>(),
        vec![(1, "CCG".into()), (10, "CCC".into()), (11, "CCT".into())]
    );
}

#[test]
fn test_scan_overlapping_matches() {
    // CCCC holds three overlapping CCN motifs; scan must report them all.
    let candidates = scan(b"ACCCCG");
    let offsets: Vec<_> = candidates.iter().map(|c| c.window_offset).collect();

    assert_eq!(offsets, vec![1, 2, 3]);
    assert!(candidates
        .iter()
        .all(|c| c.orientation == PamOrientation::Ccn));
}

#[test]
fn test_scan_order_is_ngg_then_ccn() {
    // A CCN match earlier in the window must still come after all NGG
    // matches; downstream ordering depends on it.
    let candidates = scan(b"CCTAGGA");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].orientation, PamOrientation::Ngg);
    assert_eq!(candidates[0].window_offset, 3);
    assert_eq!(candidates[1].orientation, PamOrientation::Ccn);
    assert_eq!(candidates[1].window_offset, 0);
}

#[test]
fn test_scan_distances() {
    let mut window = vec![b'A'; 63];
    window[28] = b'C';
    window[29] = b'C';
    window[30] = b'C';
    let candidates = scan(&window);

    assert_eq!(candidates.len(), 2);
    // Distances are measured from the window's own center index (29).
    assert_eq!(candidates[0].window_offset, 28);
    assert_eq!(candidates[0].distance, -1);
    assert_eq!(candidates[1].window_offset, 29);
    assert_eq!(candidates[1].distance, 0);
}

#[test]
fn test_scan_empty_and_short() {
    assert!(scan(b"").is_empty());
    assert!(scan(b"GG").is_empty());
    assert!(scan(b"AGG").len() == 1);
}
