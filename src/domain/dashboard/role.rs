//! Binds each dashboard role to its record shape and view modes.

use super::view_mode::{ClientView, ProviderView, ViewMode};
use crate::domain::foundation::Role;
use crate::domain::project::{CommissionedProject, HiredProject, RoleProject};

/// Type-level description of one dashboard variant.
pub trait DashboardRole: Send + Sync + 'static {
    type Project: RoleProject;
    type View: ViewMode;

    const ROLE: Role;
}

/// Provider dashboard: projects the user was hired for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderRole;

impl DashboardRole for ProviderRole {
    type Project = HiredProject;
    type View = ProviderView;

    const ROLE: Role = Role::Provider;
}

/// Client dashboard: projects the user commissioned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientRole;

impl DashboardRole for ClientRole {
    type Project = CommissionedProject;
    type View = ClientView;

    const ROLE: Role = Role::Client;
}
