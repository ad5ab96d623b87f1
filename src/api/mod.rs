pub mod colors;
pub mod sheet;

pub use colors::{
    handle_add_color, handle_delete_color, handle_list_colors, handle_update_color,
    ColorRequest, ColorResponse, DeleteColorResponse,
};
pub use colors::{
    __path_handle_add_color, __path_handle_delete_color, __path_handle_list_colors,
    __path_handle_update_color,
};
pub use sheet::{
    handle_generate_sheet, handle_get_sheet, handle_paint_cell, handle_set_active_slot,
    handle_set_slot, ActiveSlotRequest, CoordinateListResponse, GenerateRequest, PaintRequest,
    SheetResponse, SlotRequest,
};
pub use sheet::{
    __path_handle_generate_sheet, __path_handle_get_sheet, __path_handle_paint_cell,
    __path_handle_set_active_slot, __path_handle_set_slot,
};
