//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer. Only applies when the client sends
/// `Accept-Encoding: gzip`.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
