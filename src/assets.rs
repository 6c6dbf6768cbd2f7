use image::RgbaImage;

/// Long-lived raster assets shared read-only across all renders.
///
/// Decoded once at process start by an external collaborator and handed to
/// the generator, which holds them behind an `Arc`. Per-render state never
/// lives here; nothing in this set is mutated after construction.
#[derive(Clone, Debug)]
pub struct CardAssets {
    /// Star glyph tinted with the difficulty color in the badge.
    pub star_icon: RgbaImage,
    /// Circular cutout mask for the avatar.
    pub avatar_mask: RgbaImage,
    /// Drop shadow rendered behind the avatar when no border overlay exists.
    pub avatar_shadow: RgbaImage,
    /// Hard-edged mask applied to the gradient in the badge border layer.
    pub gradient_mask_sharp: RgbaImage,
    /// Soft-edged mask applied to the gradient over the cover layer.
    pub gradient_mask_blurred: RgbaImage,
    /// Border frame mask, unioned with the procedural badge mask.
    pub border_mask: RgbaImage,
    /// Final mask that rounds/clips the whole card.
    pub composite_mask: RgbaImage,
}
