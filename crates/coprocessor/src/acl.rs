// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::Handle;
use alloy_primitives::Address;
use std::collections::{HashMap, HashSet};

/// Access control list over handles. Grants only ever accumulate.
#[derive(Debug, Default, Clone)]
pub struct Acl {
    allowed: HashMap<Handle, HashSet<Address>>,
    public: HashSet<Handle>,
}

impl Acl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(&mut self, handle: Handle, account: Address) {
        self.allowed.entry(handle).or_default().insert(account);
    }

    pub fn make_public(&mut self, handle: Handle) {
        self.public.insert(handle);
    }

    pub fn is_allowed(&self, handle: &Handle, account: &Address) -> bool {
        self.allowed
            .get(handle)
            .is_some_and(|accounts| accounts.contains(account))
    }

    pub fn is_public(&self, handle: &Handle) -> bool {
        self.public.contains(handle)
    }

    /// Whether `account` may decrypt `handle`
    pub fn can_decrypt(&self, handle: &Handle, account: &Address) -> bool {
        self.is_public(handle) || self.is_allowed(handle, account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, B256};

    #[test]
    fn test_grants() {
        let alice = address!("0x00000000000000000000000000000000000a11ce");
        let bob = address!("0x0000000000000000000000000000000000000b0b");
        let handle = Handle::new(B256::repeat_byte(7));
        let mut acl = Acl::new();

        assert!(!acl.can_decrypt(&handle, &alice));

        acl.allow(handle, alice);
        assert!(acl.can_decrypt(&handle, &alice));
        assert!(!acl.can_decrypt(&handle, &bob));

        acl.make_public(handle);
        assert!(acl.is_public(&handle));
        assert!(acl.can_decrypt(&handle, &bob));
    }
}
