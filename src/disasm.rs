//! Assembly text for decoded instructions.

/// Operand order of a rendered mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `rd, rs, rt`
    Register,
    /// `rt, rs, imm`
    Immediate,
    /// `rs, rt, imm` (branches)
    ImmediateReversed,
    /// `rt, imm(rs)`
    BaseOffset,
    /// `target`
    Jump,
    /// mnemonic only (`syscall`, `eret`, TLB ops)
    Bare,
}

/// Candidate operands. `None` slots are left out of the rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operands<'a> {
    pub rd: Option<&'a str>,
    pub rs: Option<&'a str>,
    pub rt: Option<&'a str>,
    pub imm: Option<&'a str>,
    pub target: Option<&'a str>,
}

/// Render `mnemonic` with its operands in `layout` order.
///
/// A missing mnemonic yields `None`; no partial text is built.
pub fn render(layout: Layout, mnemonic: Option<&str>, ops: &Operands<'_>) -> Option<String> {
    mnemonic.map(|m| assemble(layout, m, ops))
}

pub fn assemble(layout: Layout, mnemonic: &str, ops: &Operands<'_>) -> String {
    let list: Vec<&str> = match layout {
        Layout::Register => [ops.rd, ops.rs, ops.rt].into_iter().flatten().collect(),
        Layout::Immediate => [ops.rt, ops.rs, ops.imm].into_iter().flatten().collect(),
        Layout::ImmediateReversed => [ops.rs, ops.rt, ops.imm].into_iter().flatten().collect(),
        Layout::BaseOffset => [ops.rt, ops.imm].into_iter().flatten().collect(),
        Layout::Jump => ops.target.into_iter().collect(),
        Layout::Bare => Vec::new(),
    };

    let mut text = mnemonic.to_string();
    if !list.is_empty() {
        text.push(' ');
        text.push_str(&list.join(", "));
    }
    if layout == Layout::BaseOffset {
        if let Some(base) = ops.rs {
            if list.is_empty() {
                text.push(' ');
            }
            text.push('(');
            text.push_str(base);
            text.push(')');
        }
    }
    text
}
