mod common;
mod pages;
