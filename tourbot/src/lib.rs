pub mod blocks;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod entities;
pub mod error;
pub mod kakao;
pub mod maps;
pub mod params;
pub mod regions;
pub mod repositories;
pub mod responses;
pub mod seed;
