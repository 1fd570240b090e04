//! Страница поиска: фильтры синхронизированы с URL, у панели
//! дополнительных фильтров есть черновик.

pub mod codec;
pub mod controller;
pub mod dispatcher;
pub mod draft;
pub mod helpers;
pub mod ui;
