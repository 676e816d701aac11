use rayon::prelude::*;

use crate::core::actions::cancellation::{check_cancelled, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::fractal_grid::FractalGrid;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, ChannelOrder, FrameBuffer};

/// Colours every value of `grid` into a packed frame.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap>(grid: &FractalGrid<T>, mapper: &CMap, channel_order: ChannelOrder) -> FrameBuffer
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    match generate_pixel_buffer_cancelable(grid, mapper, channel_order, &NeverCancel) {
        Ok(frame) => frame,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Colours rows in parallel, each row writing only its own slice of the
/// preallocated frame. Polls `cancel` at the start of each row and
/// periodically within it; a cancelled run drops the partly written frame.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    grid: &FractalGrid<T>,
    mapper: &CMap,
    channel_order: ChannelOrder,
    cancel: &C,
) -> Result<FrameBuffer, Cancelled>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    C: CancelToken,
{
    let size = grid.size();
    let mut frame = FrameBuffer::new(size, channel_order);

    if size.pixel_count() == 0 {
        return Ok(frame);
    }

    let width = size.width as usize;
    let values = grid.values();

    frame
        .bytes_mut()
        .par_chunks_mut(width * BYTES_PER_PIXEL)
        .enumerate()
        .try_for_each(|(y, dst_row)| -> Result<(), Cancelled> {
            let src_row = &values[y * width..(y + 1) * width];

            for (i, (value, dst)) in src_row.iter().zip(dst_row.chunks_exact_mut(BYTES_PER_PIXEL)).enumerate() {
                check_cancelled(cancel, i)?;
                channel_order.write(mapper.map(*value), dst);
            }

            Ok(())
        })?;

    Ok(frame)
}
