pub(crate) mod message;
pub(crate) mod navigation;
pub(crate) mod ranking_service;
pub(crate) mod scheduler;
pub(crate) mod scraping;
