//! 扫描节点实现
//!
//! ScanNode 是计划树的叶子，从表中读取数据

use crate::core::SlotRef;
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

define_plan_node! {
    pub struct ScanNode {
        table: String,
    }
    enum: Scan
    input: ZeroInput
}

impl ScanNode {
    pub(crate) fn new(id: PlanNodeId, table: impl Into<String>, output: Vec<SlotRef>) -> Self {
        Self {
            id,
            table: table.into(),
            output,
        }
    }

    /// 获取表名
    pub fn table(&self) -> &str {
        &self.table
    }
}
