// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ignite-rs/blob/main/licenses/COPYRIGHT.md

//! Daily check-in streak tracking.
//!
//! Users check in at most once per UTC day. Checking in on the day after the
//! previous check-in extends the streak; any longer gap resets it to one.
//! The longest streak each user ever reached is retained.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::prelude::*;

/// Seconds per UTC day, the granularity of check-ins.
const SECONDS_PER_DAY: u64 = 86_400;

sol_storage! {
    #[entrypoint]
    pub struct StreakTracker {
        /// Consecutive days each user has checked in.
        mapping(address => uint256) current_streak;
        /// Longest streak each user has ever reached.
        mapping(address => uint256) longest_streak;
        /// Day index of each user's latest check-in.
        mapping(address => uint256) last_check_in;
        /// Total check-ins across all users.
        uint256 total_check_ins;
    }
}

sol! {
    event CheckedIn(address indexed user, uint256 streak, uint256 day);

    #[derive(Debug)]
    error AlreadyCheckedIn(address user, uint256 day);
}

/// Represents the ways methods may fail.
#[derive(SolidityError, Debug)]
pub enum StreakTrackerError {
    AlreadyCheckedIn(AlreadyCheckedIn),
}

#[public]
impl StreakTracker {
    /// Records a check-in for the caller.
    ///
    /// Errors if the caller already checked in during the current day.
    pub fn check_in(&mut self) -> Result<(), StreakTrackerError> {
        let user = self.vm().msg_sender();
        let day = U256::from(self.vm().block_timestamp() / SECONDS_PER_DAY);

        let current = self.current_streak.get(user);
        let last = self.last_check_in.get(user);

        let streak = if current.is_zero() {
            U256::from(1)
        } else if last == day {
            return Err(StreakTrackerError::AlreadyCheckedIn(AlreadyCheckedIn {
                user,
                day,
            }));
        } else if day == last + U256::from(1) {
            current + U256::from(1)
        } else {
            U256::from(1)
        };

        self.current_streak.setter(user).set(streak);
        if streak > self.longest_streak.get(user) {
            self.longest_streak.setter(user).set(streak);
        }
        self.last_check_in.setter(user).set(day);
        self.total_check_ins
            .set(self.total_check_ins.get() + U256::from(1));

        self.vm().log(CheckedIn { user, streak, day });
        Ok(())
    }

    /// Consecutive days `user` has checked in, as of their latest check-in.
    pub fn current_streak(&self, user: Address) -> U256 {
        self.current_streak.get(user)
    }

    /// Longest streak `user` has ever reached.
    pub fn longest_streak(&self, user: Address) -> U256 {
        self.longest_streak.get(user)
    }

    /// Day index of `user`'s latest check-in.
    pub fn last_check_in(&self, user: Address) -> U256 {
        self.last_check_in.get(user)
    }

    /// Whether `user` already checked in during the current day.
    pub fn has_checked_in_today(&self, user: Address) -> bool {
        !self.current_streak.get(user).is_zero()
            && self.last_check_in.get(user)
                == U256::from(self.vm().block_timestamp() / SECONDS_PER_DAY)
    }

    /// Total check-ins across all users.
    pub fn total_check_ins(&self) -> U256 {
        self.total_check_ins.get()
    }
}
