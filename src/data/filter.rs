use super::model::Frame;

// ---------------------------------------------------------------------------
// Alignment filter: select in-range counts from a frame
// ---------------------------------------------------------------------------

/// Return the counts for every frame pixel within `[start, stop]`
/// (inclusive), in frame iteration order (ascending pixel number).
///
/// Pure function of its inputs. Membership is tested per pixel, never
/// indexed, so a pixel missing from the frame is simply not selected:
/// * `start > stop` → empty, not an error
/// * no frame pixel in range → empty, not an error
pub fn align(frame: &Frame, start: u32, stop: u32) -> Vec<u32> {
    frame
        .iter()
        .filter(|(&pixel, _)| start <= pixel && pixel <= stop)
        .map(|(_, &count)| count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame with pixels `1..=n` counting up from 10, matching how a
    /// capture reply is zipped into a frame.
    fn frame(n: u32) -> Frame {
        (1..=n).map(|p| (p, p + 9)).collect()
    }

    #[test]
    fn selects_in_range_counts_in_pixel_order() {
        // {1:10, 2:11, ..., 8:17}, map range 3..=7
        assert_eq!(align(&frame(8), 3, 7), vec![12, 13, 14, 15, 16]);
    }

    #[test]
    fn result_length_matches_in_range_key_count() {
        let f = frame(8);
        for (start, stop) in [(1, 8), (3, 7), (8, 8), (0, 100), (9, 12)] {
            let expected = f.keys().filter(|&&p| start <= p && p <= stop).count();
            assert_eq!(align(&f, start, stop).len(), expected);
        }
    }

    #[test]
    fn equal_bounds_select_at_most_one_count() {
        let f = frame(8);
        assert_eq!(align(&f, 5, 5), vec![14]);
        // Pixel 40 is absent from the frame.
        assert_eq!(align(&f, 40, 40), Vec::<u32>::new());
    }

    #[test]
    fn reversed_bounds_select_nothing() {
        assert_eq!(align(&frame(8), 7, 3), Vec::<u32>::new());
    }

    #[test]
    fn range_outside_frame_selects_nothing() {
        assert_eq!(align(&frame(8), 100, 200), Vec::<u32>::new());
    }

    #[test]
    fn empty_frame_selects_nothing() {
        assert_eq!(align(&Frame::new(), 1, 10), Vec::<u32>::new());
    }

    #[test]
    fn align_is_idempotent() {
        let f = frame(8);
        assert_eq!(align(&f, 3, 7), align(&f, 3, 7));
    }
}
