use wopr_core::{FrameBuffer, ROWS};

#[test]
fn buffer_length_matches_chain_length() {
    for matrix_count in 1..=8 {
        let mut fb = FrameBuffer::new(matrix_count);
        assert_eq!(fb.as_bytes().len(), ROWS * matrix_count);
        fb.clear();
        assert_eq!(fb.as_bytes().len(), ROWS * matrix_count);
    }
}

#[test]
fn cleared_buffer_reads_all_dark() {
    let mut fb = FrameBuffer::new(3);
    fb.set_pixel(5, 2, true);
    fb.set_pixel(17, 7, true);
    fb.clear();

    for y in 0..ROWS {
        for x in 0..fb.width() {
            assert!(!fb.pixel(x, y), "pixel ({x}, {y}) left on after clear");
        }
    }
}

#[test]
fn set_then_clear_roundtrips_every_pixel() {
    let mut fb = FrameBuffer::new(2);
    for y in 0..ROWS {
        for x in 0..fb.width() {
            fb.set_pixel(x, y, true);
            assert!(fb.pixel(x, y));
            fb.set_pixel(x, y, false);
            assert!(!fb.pixel(x, y));
        }
    }
    assert!(fb.as_bytes().iter().all(|&byte| byte == 0));
}

#[test]
fn addressing_maps_x9_to_bit_6_of_matrix_1() {
    let mut fb = FrameBuffer::new(2);
    for row in 0..ROWS {
        fb.clear();
        fb.set_pixel(9, row, true);

        for (index, &byte) in fb.as_bytes().iter().enumerate() {
            if index == row * 2 + 1 {
                assert_eq!(byte, 1 << 6);
            } else {
                assert_eq!(byte, 0, "unrelated byte {index} was touched");
            }
        }
    }
}

#[test]
fn out_of_range_writes_are_ignored() {
    let mut fb = FrameBuffer::new(2);
    fb.set_pixel(3, 3, true);
    let snapshot = fb.clone();

    fb.set_pixel(fb.width(), 0, true);
    fb.set_pixel(usize::MAX, 0, true);
    fb.set_pixel(0, ROWS, true);
    fb.set_pixel(0, usize::MAX, true);

    assert_eq!(fb, snapshot);
    assert!(!fb.pixel(fb.width(), 0));
    assert!(!fb.pixel(0, ROWS));
}

#[test]
fn row_bytes_are_contiguous_and_in_chain_order() {
    let mut fb = FrameBuffer::new(4);
    // Light the leftmost column of matrix 2 on row 5.
    fb.set_pixel(16, 5, true);

    let row = fb.row_bytes(5);
    assert_eq!(row.len(), 4);
    assert_eq!(row, &[0, 0, 0x80, 0]);
}

#[test]
#[should_panic]
fn zero_length_chain_is_rejected() {
    FrameBuffer::new(0);
}
