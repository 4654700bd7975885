use contracts::shared::countdown::Countdown;
use contracts::shared::pagination::{page_count, paginate, TablePage};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn page_length_matches_formula(items: Vec<u8>, page: u8, size: u8) -> bool {
    let page = page as usize;
    let size = size as usize + 1;
    let n = items.len();
    let expected = size.min(n.saturating_sub(page * size));
    paginate(&items, page, size).len() == expected
}

#[quickcheck]
fn pages_concatenate_to_original(items: Vec<u16>, size: u8) -> bool {
    let size = size as usize + 1;
    let rebuilt: Vec<u16> = (0..page_count(items.len(), size))
        .flat_map(|p| paginate(&items, p, size).iter().copied())
        .collect();
    rebuilt == items
}

#[quickcheck]
fn page_size_change_resets_only_that_table(page_a: u8, page_b: u8, new_size: u8) -> bool {
    let mut a = TablePage::new(10);
    let mut b = TablePage::new(10);
    a.set_page(page_a as usize);
    b.set_page(page_b as usize);

    a.set_page_size(new_size as usize + 1);

    a.page == 0 && b.page == page_b as usize && b.page_size == 10
}

#[quickcheck]
fn countdown_never_goes_negative(start: u16, ticks: u16) -> bool {
    let mut countdown = Countdown::new(start as u64);
    for _ in 0..ticks {
        countdown.tick();
    }
    countdown.remaining() == (start as u64).saturating_sub(ticks as u64)
}

#[quickcheck]
fn regenerate_always_restores_full_window(ticks: u16) -> bool {
    let mut countdown = Countdown::default();
    for _ in 0..ticks {
        countdown.tick();
    }
    countdown.reset();
    countdown.remaining() == 86_400
}
