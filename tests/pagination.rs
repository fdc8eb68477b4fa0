// tests/pagination.rs
use radio_dash::export::paginate::{page_count, paginate, scaled_height_mm, PageSize, SLIVER_MM};

#[test]
fn three_and_a_bit_pages() {
    let page = PageSize::A4;
    let placements = paginate(3.4 * page.height_mm, page);

    assert_eq!(placements.len(), 4);
    let offsets: Vec<f32> = placements.iter().map(|p| p.offset_mm).collect();
    assert_eq!(offsets, [0.0, -297.0, -594.0, -891.0]);
    for (i, p) in placements.iter().enumerate() {
        assert_eq!(p.page_index, i);
    }
}

#[test]
fn pages_cover_the_image_without_gaps() {
    let page = PageSize::LETTER;
    let height = 1234.5;
    let placements = paginate(height, page);

    let (first_top, _) = placements[0].visible(page);
    assert_eq!(first_top, 0.0);
    for pair in placements.windows(2) {
        let (_, bottom) = pair[0].visible(page);
        let (top, _) = pair[1].visible(page);
        assert!((bottom - top).abs() < 1e-3, "gap between pages: {bottom} vs {top}");
    }
    let (_, last_bottom) = placements.last().unwrap().visible(page);
    assert!(last_bottom >= height - SLIVER_MM);
    // the last page still has something to show
    let (last_top, _) = placements.last().unwrap().visible(page);
    assert!(last_top < height);
}

#[test]
fn exact_multiples_add_no_blank_page() {
    let page = PageSize::A4;
    assert_eq!(paginate(page.height_mm, page).len(), 1);
    assert_eq!(paginate(2.0 * page.height_mm, page).len(), 2);
    assert_eq!(paginate(page.height_mm + SLIVER_MM / 2.0, page).len(), 1);
}

#[test]
fn short_images_get_one_page() {
    assert_eq!(paginate(10.0, PageSize::A4).len(), 1);
    assert_eq!(paginate(0.0, PageSize::A4).len(), 1);
}

#[test]
fn scaling_keeps_aspect_ratio() {
    assert_eq!(scaled_height_mm(210, 1010, PageSize::A4), 1010.0);
    assert_eq!(scaled_height_mm(420, 594, PageSize::A4), 297.0);
    assert_eq!(scaled_height_mm(0, 100, PageSize::A4), 0.0);
}

#[test]
fn exact_multiples_stay_exact_for_long_documents() {
    for page in [PageSize::A4, PageSize::LETTER] {
        for n in 1..=200usize {
            let placements = paginate(n as f32 * page.height_mm, page);
            assert_eq!(placements.len(), n, "{n} pages of {}mm", page.height_mm);
        }
    }
}

#[test]
fn offsets_are_whole_page_steps() {
    let page = PageSize::LETTER;
    let placements = paginate(150.5 * page.height_mm, page);
    assert_eq!(placements.len(), 151);
    assert_eq!(page_count(150.5 * page.height_mm, page), 151);
    for (i, p) in placements.iter().enumerate() {
        assert_eq!(p.offset_mm, -(i as f32) * page.height_mm);
    }
}
