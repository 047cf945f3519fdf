multiversx_sc::imports!();

use crate::errors::*;
use crate::{events, guards, storage};

/// Owner-controlled set of addresses allowed to propose, vote and execute.
#[multiversx_sc::module]
pub trait MembershipModule:
    storage::StorageModule + guards::GuardsModule + events::EventsModule
{
    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        self.require_unlocked();
        self.require_owner();
        self.insert_member(&member);
    }

    /// Votes already cast by `member` keep counting.
    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        self.require_unlocked();
        self.require_owner();
        self.require_non_zero(&member);
        require!(self.members().swap_remove(&member), ERR_NOT_MEMBER);

        self.member_removed_event(&member);
    }

    fn insert_member(&self, member: &ManagedAddress) {
        self.require_non_zero(member);
        require!(self.members().insert(member.clone()), ERR_ALREADY_MEMBER);

        self.member_added_event(member);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(memberCount)]
    fn member_count(&self) -> u64 {
        self.members().len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            result.push(member);
        }
        result
    }

    #[view(getMembersPage)]
    fn get_members_page(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }
}
