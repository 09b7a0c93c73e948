//! Program Image Loader.
//!
//! This module places raw program images into simulated memory before the first
//! cycle. It performs:
//! 1. **Capacity check:** Rejects images that would not fit, before touching memory.
//! 2. **Placement:** Copies the bytes verbatim; the first byte of an image loaded
//!    with [`load_image`] is the instruction at address 0.

use tracing::debug;

use crate::common::SimError;
use crate::core::Cpu;

/// Loads `image` at address 0.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image exceeds memory capacity.
pub fn load_image(cpu: &mut Cpu, image: &[u8]) -> Result<(), SimError> {
    load_image_at(cpu, image, 0)
}

/// Loads `image` starting at `offset`.
///
/// Memory outside `offset..offset + image.len()` is left as it was; the PC is
/// not changed.
///
/// # Arguments
///
/// * `cpu`    - CPU whose memory receives the image.
/// * `image`  - Raw instruction and data bytes.
/// * `offset` - Address of the first image byte.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if any byte would land outside memory.
pub fn load_image_at(cpu: &mut Cpu, image: &[u8], offset: u64) -> Result<(), SimError> {
    let capacity = cpu.memory.capacity();
    let fits = usize::try_from(offset)
        .ok()
        .and_then(|start| start.checked_add(image.len()))
        .is_some_and(|end| end <= capacity);
    if !fits {
        return Err(SimError::ImageTooLarge {
            len: image.len(),
            offset,
            capacity,
        });
    }

    cpu.memory.write_slice(offset, image)?;
    debug!(
        "loaded {} bytes at {:#x} (capacity {})",
        image.len(),
        offset,
        capacity
    );
    Ok(())
}
