use chrono::NaiveTime;

use crate::models::menu::Meal;

/// A fixed meal slot during which voting is open. Bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct VoteWindow {
    pub meal: Meal,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// The four voting windows, in declaration order. They do not overlap; if
/// that ever changes, the first listed match wins.
pub fn windows() -> [VoteWindow; 4] {
    [
        VoteWindow { meal: Meal::Breakfast, open: hm(7, 0), close: hm(8, 20) },
        VoteWindow { meal: Meal::Lunch, open: hm(12, 0), close: hm(14, 30) },
        VoteWindow { meal: Meal::Dinner, open: hm(18, 0), close: hm(19, 0) },
        VoteWindow { meal: Meal::Snack, open: hm(21, 15), close: hm(22, 0) },
    ]
}

/// Which meal is open for voting at `now`, or None outside every window.
pub fn active_meal(now: NaiveTime) -> Option<Meal> {
    windows()
        .iter()
        .find(|w| w.open <= now && now <= w.close)
        .map(|w| w.meal)
}

/// Derive the client-side duplicate-vote flag name for a (date, meal) pair.
/// Turkish diacritics are transliterated, separators collapse to `_`, and
/// anything outside A–Z/0–9/_ is dropped so the key is storage-safe. This
/// marker is a soft, per-browser constraint only: other devices, cleared
/// storage, or private windows bypass it.
pub fn marker_key(date_display: &str, meal: Meal) -> String {
    let raw = format!("VOTED {date_display} {}", meal.label());
    let mut key = String::with_capacity(raw.len());
    for ch in raw.chars() {
        let mapped = match ch {
            'ç' | 'Ç' => 'C',
            'ğ' | 'Ğ' => 'G',
            'ı' | 'İ' => 'I',
            'ö' | 'Ö' => 'O',
            'ş' | 'Ş' => 'S',
            'ü' | 'Ü' => 'U',
            ' ' | '.' | '-' => '_',
            other => other.to_ascii_uppercase(),
        };
        if mapped.is_ascii_alphanumeric() || mapped == '_' {
            key.push(mapped);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert_eq!(active_meal(hms(7, 0, 0)), Some(Meal::Breakfast));
        assert_eq!(active_meal(hms(8, 20, 0)), Some(Meal::Breakfast));
        assert_eq!(active_meal(hms(8, 20, 1)), None);
        assert_eq!(active_meal(hms(11, 59, 59)), None);
        assert_eq!(active_meal(hms(12, 0, 0)), Some(Meal::Lunch));
        assert_eq!(active_meal(hms(14, 30, 0)), Some(Meal::Lunch));
        assert_eq!(active_meal(hms(18, 30, 0)), Some(Meal::Dinner));
        assert_eq!(active_meal(hms(21, 15, 0)), Some(Meal::Snack));
        assert_eq!(active_meal(hms(22, 0, 1)), None);
        assert_eq!(active_meal(hms(3, 0, 0)), None);
    }

    #[test]
    fn marker_key_is_stable_and_distinct() {
        let a = marker_key("5.3.2025", Meal::Lunch);
        let b = marker_key("5.3.2025", Meal::Lunch);
        assert_eq!(a, b);
        assert_ne!(a, marker_key("5.3.2025", Meal::Dinner));
        assert_ne!(a, marker_key("6.3.2025", Meal::Lunch));
    }

    #[test]
    fn marker_key_transliterates_turkish_labels() {
        assert_eq!(marker_key("5.3.2025", Meal::Lunch), "VOTED_5_3_2025_OGLE");
        assert_eq!(marker_key("5.3.2025", Meal::Dinner), "VOTED_5_3_2025_AKSAM");
        assert_eq!(
            marker_key("5.3.2025", Meal::Snack),
            "VOTED_5_3_2025_ARA_OGUN"
        );
    }

    #[test]
    fn marker_key_uses_safe_charset_only() {
        for meal in Meal::ALL {
            let key = marker_key("31.12.2025", meal);
            assert!(key
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }
}
