use super::*;

#[test]
fn filter_label_uses_all_for_no_filter() {
    assert_eq!(filter_label(None), "All");
    assert_eq!(filter_label(Some(Category::Internet)), "Internet");
}

#[test]
fn filter_choices_start_with_all_then_categories() {
    let choices: Vec<Option<Category>> = filter_choices().collect();
    assert_eq!(choices.len(), 7);
    assert_eq!(choices[0], None);
    assert_eq!(choices[1], Some(Category::Water));
    assert_eq!(choices[6], Some(Category::Other));
}
