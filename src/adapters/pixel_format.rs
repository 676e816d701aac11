//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, ChannelOrder, FrameBuffer};

/// Swaps the first and third channel of every packed pixel. Turns BGR into
/// RGB and back.
///
/// # Panics
/// Panics if the buffers differ in length or `src` is not a multiple of 3.
pub fn swap_red_blue(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match src length {}",
        dst.len(),
        src.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(BYTES_PER_PIXEL).zip(dst.chunks_exact_mut(BYTES_PER_PIXEL)) {
        dst_pixel[0] = src_pixel[2];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[0];
    }
}

/// Returns the frame's pixels as packed `[R,G,B]` bytes, whatever order the
/// frame was rendered in.
#[must_use]
pub fn frame_to_rgb(frame: &FrameBuffer) -> Vec<u8> {
    match frame.channel_order() {
        ChannelOrder::Rgb => frame.bytes().to_vec(),
        ChannelOrder::Bgr => {
            let mut rgb = vec![0; frame.len()];
            swap_red_blue(frame.bytes(), &mut rgb);
            rgb
        }
    }
}

/// Row stride of a 24-bit bitmap surface whose rows start on 4-byte boundaries.
#[must_use]
pub fn aligned_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL).div_ceil(4) * 4
}

/// Copies tightly packed rows into a surface with `stride` bytes per row.
/// Padding bytes are left zeroed.
///
/// # Panics
/// Panics if `stride` is shorter than a packed row or `src` does not hold
/// `height` rows of `width` pixels.
#[must_use]
pub fn pad_rows(src: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    let row_len = width * BYTES_PER_PIXEL;
    assert!(stride >= row_len, "stride {} is shorter than row length {}", stride, row_len);
    assert_eq!(src.len(), row_len * height, "src length {} does not match {}x{}", src.len(), width, height);

    if stride == row_len {
        return src.to_vec();
    }

    let mut dst = vec![0; stride * height];

    if row_len == 0 {
        return dst;
    }

    for (src_row, dst_row) in src.chunks_exact(row_len).zip(dst.chunks_exact_mut(stride)) {
        dst_row[..row_len].copy_from_slice(src_row);
    }

    dst
}
