pub(crate) mod backend;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod export;
pub(crate) mod label;
pub(crate) mod passes;
pub(crate) mod pipeline;
