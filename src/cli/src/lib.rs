//! mountfix CLI - fixes `RUN --mount=...,z` for Podman and Buildah builds.

pub mod commands;
pub mod output;
