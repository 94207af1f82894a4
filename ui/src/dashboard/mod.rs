mod gate;
pub use gate::{gate, logout, Gate};

mod tiles;
pub use tiles::{Destination, TABS, TILES};

mod view;
pub use view::DashboardView;
