/// List helpers shared by the admin tables (sorting, filtering, header toggles).
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be filtered by a free-text query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given column.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by a free-text query; queries shorter than 3 characters are
/// treated as "no filter".
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < 3 {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator glyph for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Build a click handler that toggles the sort state for a column.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: i64,
        name: String,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 2,
                name: "Bhavana".into(),
            },
            Row {
                id: 1,
                name: "Arjun".into(),
            },
            Row {
                id: 3,
                name: "Chitra".into(),
            },
        ]
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut items = rows();
        sort_list(&mut items, "id", true);
        assert_eq!(items[0].id, 1);
        sort_list(&mut items, "id", false);
        assert_eq!(items[0].id, 3);
    }

    #[test]
    fn short_queries_do_not_filter() {
        let filtered = filter_list(rows(), "ar");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn filters_case_insensitively() {
        let filtered = filter_list(rows(), "ARJ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Arjun");
    }

    #[test]
    fn indicator_follows_active_column() {
        assert_eq!(get_sort_indicator("id", "id", true), " ▲");
        assert_eq!(get_sort_indicator("id", "id", false), " ▼");
        assert_eq!(get_sort_indicator("id", "name", true), " ⇅");
    }
}
