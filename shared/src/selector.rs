use rand::Rng;

use crate::session::SpinSession;
use crate::wheel_config::WheelSettings;

/// Picks the winning slice for one spin, uniformly at random over the
/// eligible set: every slice when repeats are allowed, otherwise only the
/// slices the session has not shown yet. Returns the winner's index in the
/// full slice array (geometry is computed against the full array), or
/// `None` when nothing is eligible.
pub fn select_winner<R: Rng>(
    settings: &WheelSettings,
    session: &SpinSession,
    rng: &mut R,
) -> Option<usize> {
    let eligible: Vec<usize> = settings
        .slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| session.is_eligible(slice, settings.allow_repeats))
        .map(|(i, _)| i)
        .collect();

    if eligible.is_empty() {
        return None;
    }
    Some(eligible[rng.gen_range(0..eligible.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_config::default_settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_over_all_slices_with_repeats() {
        let settings = default_settings(None);
        let session = SpinSession::new();
        let mut rng = StdRng::seed_from_u64(7);

        let trials = 60_000;
        let mut counts = vec![0u32; settings.slices.len()];
        for _ in 0..trials {
            let idx = select_winner(&settings, &session, &mut rng).unwrap();
            counts[idx] += 1;
        }

        let expected = trials as f64 / settings.slices.len() as f64;
        for count in counts {
            let freq = count as f64 / expected;
            assert!((0.92..=1.08).contains(&freq), "skewed frequency: {}", freq);
        }
    }

    #[test]
    fn test_shown_slices_are_excluded_without_repeats() {
        let mut settings = default_settings(None);
        settings.allow_repeats = false;
        let mut session = SpinSession::new();
        session.prime(&settings.slices);
        session.mark_shown(&settings.slices[0].id);
        session.mark_shown(&settings.slices[2].id);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let idx = select_winner(&settings, &session, &mut rng).unwrap();
            assert!(idx != 0 && idx != 2, "picked an already shown slice");
        }
    }

    #[test]
    fn test_indices_refer_to_full_array() {
        let mut settings = default_settings(None);
        settings.allow_repeats = false;
        let mut session = SpinSession::new();
        session.prime(&settings.slices);
        for slice in &settings.slices[..5] {
            session.mark_shown(&slice.id);
        }

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select_winner(&settings, &session, &mut rng), Some(5));
    }

    #[test]
    fn test_none_when_exhausted() {
        let mut settings = default_settings(None);
        settings.allow_repeats = false;
        let mut session = SpinSession::new();
        session.prime(&settings.slices);
        for slice in &settings.slices {
            session.mark_shown(&slice.id);
        }

        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(select_winner(&settings, &session, &mut rng), None);
    }

    #[test]
    fn test_empty_wheel_selects_nothing() {
        let mut settings = default_settings(None);
        settings.slices.clear();
        let session = SpinSession::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_winner(&settings, &session, &mut rng), None);
    }

    #[test]
    fn test_single_slice_is_certain() {
        let mut settings = default_settings(None);
        settings.slices.truncate(1);
        let session = SpinSession::new();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            assert_eq!(select_winner(&settings, &session, &mut rng), Some(0));
        }
    }
}
