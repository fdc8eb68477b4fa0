// src/gui/pages/commentators.rs
use crate::ingest::ResultSet::{self, *};

use super::Page;

pub struct CommentatorsPage;
pub static PAGE: CommentatorsPage = CommentatorsPage;

impl Page for CommentatorsPage {
    fn title(&self) -> &'static str { "Commentators" }
    fn sets(&self) -> &'static [ResultSet] { &[Commentators, CommentatorDuos] }
    fn export_stem(&self) -> &'static str { "commentators" }
}
