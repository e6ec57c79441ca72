use avtosalon::pagination::{
    Paginated, clear_sort_url, page_numbers, page_url, sort_url,
};

#[test]
fn window_around_middle_page() {
    assert_eq!(
        page_numbers(10, 5),
        vec![
            Some(1),
            None,
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
            None,
            Some(10)
        ]
    );
}

#[test]
fn window_without_gaps() {
    assert_eq!(page_numbers(3, 1), vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn window_for_empty_catalog() {
    assert!(page_numbers(0, 1).is_empty());
}

#[test]
fn window_small_totals_have_no_ellipsis() {
    for total in [1, 2, 3, 4] {
        for current in 1..=total {
            let pages = page_numbers(total, current);
            assert!(
                pages.iter().all(|t| t.is_some()),
                "unexpected ellipsis for total={total} current={current}"
            );
            let numbers: Vec<usize> = pages.into_iter().flatten().collect();
            assert_eq!(numbers, (1..=total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn window_single_ellipsis_boundaries() {
    // total=5 is the first size where a gap can appear at all.
    assert_eq!(
        page_numbers(5, 1),
        vec![Some(1), Some(2), Some(3), None, Some(5)]
    );
    assert_eq!(
        page_numbers(5, 3),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
    assert_eq!(
        page_numbers(6, 1),
        vec![Some(1), Some(2), Some(3), None, Some(6)]
    );
    assert_eq!(
        page_numbers(7, 1),
        vec![Some(1), Some(2), Some(3), None, Some(7)]
    );
    // total=8 still never produces two gaps, whatever the current page.
    for current in 1..=8 {
        let gaps = page_numbers(8, current).iter().filter(|t| t.is_none()).count();
        assert!(gaps <= 1, "two gaps for total=8 current={current}");
    }
}

#[test]
fn window_double_ellipsis_first_appears_at_nine_pages() {
    let gaps = |total: usize, current: usize| {
        page_numbers(total, current)
            .iter()
            .filter(|t| t.is_none())
            .count()
    };
    assert_eq!(gaps(9, 5), 2);
    assert!((1..=8).all(|total| (1..=total).all(|current| gaps(total, current) < 2)));
}

#[test]
fn window_always_keeps_first_and_last_page() {
    for total in 1..=15 {
        for current in 1..=total {
            let numbers: Vec<usize> = page_numbers(total, current).into_iter().flatten().collect();
            assert_eq!(
                numbers.iter().filter(|&&n| n == 1).count(),
                1,
                "page 1 missing or repeated for total={total} current={current}"
            );
            assert_eq!(
                numbers.iter().filter(|&&n| n == total).count(),
                1,
                "last page missing or repeated for total={total} current={current}"
            );
            assert!(
                numbers.windows(2).all(|w| w[0] < w[1]),
                "window not ascending for total={total} current={current}"
            );
            assert!(numbers.contains(&current));
        }
    }
}

#[test]
fn paginated_prev_next_flags() {
    for total in 1..=10 {
        for current in 1..=total {
            let paginated = Paginated::new(current, total, None);
            assert_eq!(paginated.has_previous, current > 1);
            assert_eq!(paginated.has_next, current < total);
            assert_eq!(paginated.previous_url.is_some(), current > 1);
            assert_eq!(paginated.next_url.is_some(), current < total);
        }
    }
}

#[test]
fn paginated_first_page_of_three() {
    let paginated = Paginated::new(1, 3, None);
    assert!(!paginated.has_previous);
    assert!(paginated.has_next);
    assert_eq!(paginated.next_url.as_deref(), Some("/?_page=2"));

    let numbers: Vec<usize> = paginated
        .pages
        .iter()
        .map(|t| t.as_ref().map(|l| l.number))
        .collect::<Option<Vec<_>>>()
        .unwrap();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn paginated_marks_current_page() {
    let paginated = Paginated::new(5, 10, None);
    for link in paginated.pages.iter().flatten() {
        assert_eq!(link.current, link.number == 5);
    }
}

#[test]
fn paginated_links_preserve_sort() {
    let paginated = Paginated::new(5, 10, Some(("price", "desc")));
    for link in paginated.pages.iter().flatten() {
        assert_eq!(
            link.url,
            format!("/?_page={}&_sort=price&_order=desc", link.number)
        );
    }
    assert_eq!(
        paginated.previous_url.as_deref(),
        Some("/?_page=4&_sort=price&_order=desc")
    );
    assert_eq!(
        paginated.next_url.as_deref(),
        Some("/?_page=6&_sort=price&_order=desc")
    );
}

#[test]
fn window_tolerates_huge_page_values() {
    assert_eq!(page_numbers(10, usize::MAX), vec![Some(1), None]);

    let paginated = Paginated::new(usize::MAX, usize::MAX, None);
    assert_eq!(paginated.page, usize::MAX);
    assert!(paginated.has_previous);
    assert!(!paginated.has_next);
    assert_eq!(paginated.next_url, None);

    // Far out of range, the window degenerates to the first page and a gap.
    let paginated = Paginated::new(usize::MAX, 10, None);
    let tokens: Vec<Option<usize>> = paginated
        .pages
        .iter()
        .map(|t| t.as_ref().map(|l| l.number))
        .collect();
    assert_eq!(tokens, vec![Some(1), None]);
}

#[test]
fn paginated_clamps_page_zero() {
    let paginated = Paginated::new(0, 5, None);
    assert_eq!(paginated.page, 1);
    assert!(!paginated.has_previous);
}

#[test]
fn page_url_without_sort() {
    assert_eq!(page_url(2, None), "/?_page=2");
}

#[test]
fn page_url_carries_current_sort() {
    assert_eq!(
        page_url(3, Some(("price", "desc"))),
        "/?_page=3&_sort=price&_order=desc"
    );
}

#[test]
fn sort_url_resets_to_first_page() {
    assert_eq!(
        sort_url("price", "asc"),
        "/?_limit=12&_page=1&_sort=price&_order=asc"
    );
    assert_eq!(
        sort_url("price", "desc"),
        "/?_limit=12&_page=1&_sort=price&_order=desc"
    );
}

#[test]
fn clear_sort_url_keeps_current_page() {
    assert_eq!(clear_sort_url(4), "/?_limit=12&_page=4");
}
