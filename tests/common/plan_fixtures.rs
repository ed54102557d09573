//! 计划夹具模块
//!
//! 构建集成测试中反复使用的计划形状

use predicate_pullup::core::{Expression, SlotRef};
use predicate_pullup::query::planner::plan::{JoinType, SetQualifier};
use predicate_pullup::{PlanArena, PlanNodeId};

use super::assertions::assert_ok;
use super::{col, eq, gt, lt, slots};

/// 订单与客户的连接计划
///
/// ```text
/// Filter(o_cust = c_id)
///   Join(INNER)
///     Filter(o_amount > 100)
///       Scan(orders: o_id, o_cust, o_amount)
///     Filter(c_id < 5000)
///       Scan(customers: c_id, c_region)
/// ```
pub struct OrdersCustomers {
    pub arena: PlanArena,
    pub orders: Vec<SlotRef>,
    pub customers: Vec<SlotRef>,
    pub orders_scan: PlanNodeId,
    pub orders_filter: PlanNodeId,
    pub customers_filter: PlanNodeId,
    pub join: PlanNodeId,
    pub root: PlanNodeId,
}

pub fn orders_customers() -> OrdersCustomers {
    let mut arena = PlanArena::new();
    let orders = slots(&["o_id", "o_cust", "o_amount"]);
    let customers = slots(&["c_id", "c_region"]);

    let orders_scan = arena.add_scan("orders", orders.clone());
    let customers_scan = arena.add_scan("customers", customers.clone());
    let orders_filter = assert_ok(arena.add_filter(orders_scan, vec![gt(&orders[2], 100)]));
    let customers_filter =
        assert_ok(arena.add_filter(customers_scan, vec![lt(&customers[0], 5000)]));
    let join = assert_ok(arena.add_join(
        JoinType::Inner,
        orders_filter,
        customers_filter,
        Vec::new(),
        Vec::new(),
    ));
    let root = assert_ok(arena.add_filter(join, vec![eq(&orders[1], &customers[0])]));

    OrdersCustomers {
        arena,
        orders,
        customers,
        orders_scan,
        orders_filter,
        customers_filter,
        join,
        root,
    }
}

/// 两个分支都带过滤条件的 UNION
///
/// 返回 `(arena, union, 输出列)`，分支条件分别为
/// `a > 0 AND a < 10` 与 `b > 0`。
pub fn filtered_union(qualifier: SetQualifier) -> (PlanArena, PlanNodeId, SlotRef) {
    let mut arena = PlanArena::new();
    let left_slots = slots(&["a"]);
    let right_slots = slots(&["b"]);
    let left_scan = arena.add_scan("l", left_slots.clone());
    let right_scan = arena.add_scan("r", right_slots.clone());
    let left = assert_ok(arena.add_filter(
        left_scan,
        vec![Expression::and(vec![gt(&left_slots[0], 0), lt(&left_slots[0], 10)])],
    ));
    let right = assert_ok(arena.add_filter(right_scan, vec![gt(&right_slots[0], 0)]));

    let output = SlotRef::new("u");
    let union = assert_ok(arena.add_union(
        qualifier,
        vec![left, right],
        vec![left_slots, right_slots],
        Vec::new(),
        vec![output.clone()],
    ));
    (arena, union, output)
}

/// 长度为 `depth` 的过滤链，每层一个 `x > i`
pub fn deep_filter_chain(depth: usize) -> (PlanArena, PlanNodeId, SlotRef) {
    let mut arena = PlanArena::new();
    let x = SlotRef::new("x");
    let mut current = arena.add_scan("t", vec![x.clone()]);
    for level in 0..depth {
        current = assert_ok(arena.add_filter(
            current,
            vec![Expression::greater_than(col(&x), Expression::literal(level as i64))],
        ));
    }
    (arena, current, x)
}
