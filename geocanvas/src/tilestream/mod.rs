//! Tile-stream layer metadata.
//!
//! A tile stream is a remote tiled-imagery service described by a
//! TileJSON-style info dictionary: zoom range, bounding box, layer type,
//! tile size. Only the metadata lives here - fetching and decoding the
//! tiles themselves is the rendering host's concern.

mod source;

pub use source::{
    LayerType, TileStreamError, TileStreamSource, DEFAULT_MAX_TILE_ZOOM, DEFAULT_MIN_TILE_ZOOM,
    DEFAULT_TILE_SIZE,
};
