pub mod mock;
pub mod palette;
pub mod primitives;
pub mod types;

pub use mock::generate_mock_series;
pub use palette::{
    COLOR_PALETTE, ColorScheme, HexColor, blend_colors, color_by_index, unique_color_by_index,
};
pub use primitives::{format_number_to_percent, parse_percent_to_number};
pub use types::{DateSeries, POINT_DATE_FIELD, POINT_VALUE_FIELD, Point};
