mod common;
mod facade;
mod synergy;
