//! Pin-level checks. None of these are fatal.

use super::Validator;
use crate::ir::Pin;

impl Validator {
    pub(super) fn check_pin(&mut self, node_id: &str, pin: &Pin) {
        let at = format!("{}.{}", node_id, pin.id);

        if pin.id.is_empty() {
            self.warn(format!("pin '{}' on node {} has an empty id", pin.name, node_id));
        }

        if pin.pin_type.is_container() && pin.sub_type.is_empty() {
            self.warn(format!("container pin {} has no element type", at));
        }
        if pin.pin_type.needs_subtype() && pin.sub_type.is_empty() {
            self.warn(format!("{:?} pin {} has no subtype", pin.pin_type, at));
        }

        if pin.is_exec() {
            if !pin.default_value.is_empty() {
                self.warn(format!("exec pin {} carries a default value", at));
            }
            if pin.is_const || pin.is_reference {
                self.warn(format!("exec pin {} is marked const or by-reference", at));
            }
        }

        if pin.pin_type.is_delegate() && pin.is_const {
            self.warn(format!("delegate pin {} is marked const", at));
        }
        if pin.pin_type.is_soft_reference() && pin.sub_type.is_empty() {
            self.warn(format!("soft reference pin {} has no subtype", at));
        }

        if pin.container_flag_count() > 1 {
            self.warn(format!("pin {} has more than one container flag", at));
        }

        if pin.is_const && pin.is_reference && !pin.is_exec() {
            tracing::debug!("[VALIDATE] Pin {} is a const reference", at);
        }
    }
}
