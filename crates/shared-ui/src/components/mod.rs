// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox_field;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod form_select;
pub mod input;
pub mod notice;
pub mod page_header;
pub mod skeleton;
pub mod tab_nav;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox_field::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use notice::*;
pub use page_header::*;
pub use skeleton::*;
pub use tab_nav::*;
