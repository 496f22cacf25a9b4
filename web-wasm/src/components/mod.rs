pub mod bento_grid;
pub mod experience;
pub mod header;
pub mod project_card;
pub mod recent_projects;
pub mod tag_strip;
