pub mod dto;

pub use dto::{ChangeRoleDto, RoleIssue, RoleIssueType, UserRoleRow, UserWithRoles};
