//! 集中式授权策略
//!
//! 纯函数决策表：(操作者, 资源, 动作) -> 允许 / 拒绝 / 不存在。
//! 所有服务方法统一先加载资源再调用本模块，权限规则不得在端点内重复实现。
//!
//! 排序约定：资源不存在时服务层直接返回 404（所有角色一致），
//! 资源存在但无权访问时本模块返回 Denied（403）。

use crate::models::users::entities::UserRole;

/// 发起操作的已认证身份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub role: UserRole,
}

impl Actor {
    pub fn new(id: i64, role: UserRole) -> Self {
        Self { id, role }
    }
}

/// 资源实例的授权事实
///
/// 变体只携带决策需要的字段，由服务层在加载实体后填充，
/// 本模块不做任何 IO。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// 用户资料（target_id 为被访问用户）
    User { target_id: i64 },
    /// 班级（enrolled: 操作者是否已选该课）
    Class { teacher_id: i64, enrolled: bool },
    /// 班级花名册
    Roster { teacher_id: i64 },
    /// 选课操作（无实例事实，按角色决定）
    Enrollment,
    /// 班级内容：资料 / 作业 / 直播课
    ClassContent { teacher_id: i64, enrolled: bool },
    /// 作业提交（student_id 为提交者，teacher_id 为作业作者）
    Submission {
        student_id: i64,
        teacher_id: i64,
        enrolled: bool,
    },
    /// 私人记录：笔记 / 日历事件
    OwnedRecord { owner_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Grade,
}

/// 决策结果
///
/// 实体是否存在由服务层先行判定（缺失即 404），
/// authorize 只在实体已确认存在后裁决 Allowed / Denied。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(&'static str),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// 决策表主入口，纯函数、无副作用、确定性
pub fn authorize(actor: &Actor, resource: &Resource, action: Action) -> Decision {
    use UserRole::*;

    match resource {
        // 用户资料：本人可读写自己，其余仅管理员
        Resource::User { target_id } => match (actor.role, action) {
            (Admin, _) => Decision::Allowed,
            (_, Action::Read | Action::Update) if actor.id == *target_id => Decision::Allowed,
            (_, Action::Delete) => Decision::Denied("only admins may deactivate users"),
            _ => Decision::Denied("users may only access their own profile"),
        },

        // 班级：创建者即负责人；读取按 角色/归属/选课 区分
        Resource::Class {
            teacher_id,
            enrolled,
        } => match (actor.role, action) {
            (Student, Action::Create) => Decision::Denied("students may not create classes"),
            (_, Action::Create) => Decision::Allowed,
            (Admin, _) => Decision::Allowed,
            (Teacher, Action::Read) if actor.id == *teacher_id => Decision::Allowed,
            (Teacher, Action::Update | Action::Delete) if actor.id == *teacher_id => {
                Decision::Allowed
            }
            (Teacher, Action::Read) => Decision::Denied("not the owner of this class"),
            (Teacher, _) => Decision::Denied("only the owning teacher may modify this class"),
            (Student, Action::Read) if *enrolled => Decision::Allowed,
            (Student, Action::Read) => Decision::Denied("not enrolled in this class"),
            (Student, _) => Decision::Denied("students may not modify classes"),
        },

        // 花名册：管理员或班级负责人
        Resource::Roster { teacher_id } => match actor.role {
            Admin => Decision::Allowed,
            Teacher if actor.id == *teacher_id => Decision::Allowed,
            Teacher => Decision::Denied("not the owner of this class"),
            Student => Decision::Denied("students may not view class rosters"),
        },

        // 选课：教师与管理员可录入，学生不可自行选课
        Resource::Enrollment => match actor.role {
            Admin | Teacher => Decision::Allowed,
            Student => Decision::Denied("students may not manage enrollments"),
        },

        // 班级内容（资料/作业/直播课）：写同班级写门禁，读放宽到已选课学生
        Resource::ClassContent {
            teacher_id,
            enrolled,
        } => match (actor.role, action) {
            (Admin, _) => Decision::Allowed,
            (Teacher, _) if actor.id == *teacher_id => Decision::Allowed,
            (Teacher, _) => Decision::Denied("not the owner of this class"),
            (Student, Action::Read) if *enrolled => Decision::Allowed,
            (Student, Action::Read) => Decision::Denied("not enrolled in this class"),
            (Student, _) => Decision::Denied("students may not modify class content"),
        },

        // 提交：学生本人创建/查看，作业作者与管理员查看/批改
        Resource::Submission {
            student_id,
            teacher_id,
            enrolled,
        } => match (actor.role, action) {
            (Student, Action::Create) if actor.id == *student_id && *enrolled => Decision::Allowed,
            (Student, Action::Create) if actor.id == *student_id => {
                Decision::Denied("not enrolled in this class")
            }
            (Student, Action::Create) => {
                Decision::Denied("students may only submit their own work")
            }
            (Student, Action::Read) if actor.id == *student_id => Decision::Allowed,
            (Student, _) => Decision::Denied("students may only view their own submissions"),
            (Admin, Action::Read | Action::Grade) => Decision::Allowed,
            (Teacher, Action::Read | Action::Grade) if actor.id == *teacher_id => Decision::Allowed,
            (Teacher, Action::Read | Action::Grade) => {
                Decision::Denied("only the assignment author may access submissions")
            }
            (_, Action::Create) => Decision::Denied("only students submit assignments"),
            _ => Decision::Denied("operation not permitted on submissions"),
        },

        // 私人记录：严格属主私有，管理员亦不可读
        Resource::OwnedRecord { owner_id } => {
            if actor.id == *owner_id {
                Decision::Allowed
            } else {
                Decision::Denied("personal records are private to their owner")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Actor {
        Actor::new(1, UserRole::Admin)
    }
    fn teacher(id: i64) -> Actor {
        Actor::new(id, UserRole::Teacher)
    }
    fn student(id: i64) -> Actor {
        Actor::new(id, UserRole::Student)
    }

    #[test]
    fn user_self_access() {
        let r = Resource::User { target_id: 42 };
        assert!(authorize(&student(42), &r, Action::Read).is_allowed());
        assert!(authorize(&student(42), &r, Action::Update).is_allowed());
        assert!(authorize(&teacher(42), &r, Action::Read).is_allowed());
    }

    #[test]
    fn user_other_access_denied_except_admin() {
        let r = Resource::User { target_id: 42 };
        assert!(!authorize(&student(7), &r, Action::Read).is_allowed());
        assert!(!authorize(&teacher(7), &r, Action::Update).is_allowed());
        assert!(authorize(&admin(), &r, Action::Read).is_allowed());
        assert!(authorize(&admin(), &r, Action::Delete).is_allowed());
    }

    #[test]
    fn deactivate_restricted_to_admin() {
        let r = Resource::User { target_id: 42 };
        // 即便是本人也不能自行注销
        assert!(!authorize(&student(42), &r, Action::Delete).is_allowed());
        assert!(authorize(&admin(), &r, Action::Delete).is_allowed());
    }

    #[test]
    fn class_create_denied_for_students() {
        let r = Resource::Class {
            teacher_id: 0,
            enrolled: false,
        };
        assert!(!authorize(&student(5), &r, Action::Create).is_allowed());
        assert!(authorize(&teacher(5), &r, Action::Create).is_allowed());
        assert!(authorize(&admin(), &r, Action::Create).is_allowed());
    }

    #[test]
    fn class_read_scoping() {
        let owned = Resource::Class {
            teacher_id: 10,
            enrolled: false,
        };
        assert!(authorize(&teacher(10), &owned, Action::Read).is_allowed());
        assert!(!authorize(&teacher(11), &owned, Action::Read).is_allowed());
        assert!(authorize(&admin(), &owned, Action::Read).is_allowed());

        let enrolled = Resource::Class {
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&student(20), &enrolled, Action::Read).is_allowed());
        let not_enrolled = Resource::Class {
            teacher_id: 10,
            enrolled: false,
        };
        assert!(!authorize(&student(20), &not_enrolled, Action::Read).is_allowed());
    }

    #[test]
    fn class_update_requires_owner_or_admin() {
        let r = Resource::Class {
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&teacher(10), &r, Action::Update).is_allowed());
        assert!(!authorize(&teacher(11), &r, Action::Update).is_allowed());
        assert!(!authorize(&student(20), &r, Action::Update).is_allowed());
        assert!(authorize(&admin(), &r, Action::Delete).is_allowed());
    }

    #[test]
    fn roster_visible_to_owner_and_admin_only() {
        let r = Resource::Roster { teacher_id: 10 };
        assert!(authorize(&admin(), &r, Action::Read).is_allowed());
        assert!(authorize(&teacher(10), &r, Action::Read).is_allowed());
        assert!(!authorize(&teacher(11), &r, Action::Read).is_allowed());
        assert!(!authorize(&student(20), &r, Action::Read).is_allowed());
    }

    #[test]
    fn enrollment_create_roles() {
        assert!(authorize(&admin(), &Resource::Enrollment, Action::Create).is_allowed());
        assert!(authorize(&teacher(10), &Resource::Enrollment, Action::Create).is_allowed());
        assert!(!authorize(&student(20), &Resource::Enrollment, Action::Create).is_allowed());
    }

    #[test]
    fn class_content_write_gate() {
        let r = Resource::ClassContent {
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&teacher(10), &r, Action::Create).is_allowed());
        assert!(!authorize(&teacher(11), &r, Action::Create).is_allowed());
        assert!(!authorize(&student(20), &r, Action::Update).is_allowed());
        // 已选课学生可读
        assert!(authorize(&student(20), &r, Action::Read).is_allowed());
    }

    #[test]
    fn submission_create_requires_enrolled_self() {
        let own = Resource::Submission {
            student_id: 20,
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&student(20), &own, Action::Create).is_allowed());

        let not_enrolled = Resource::Submission {
            student_id: 20,
            teacher_id: 10,
            enrolled: false,
        };
        assert!(!authorize(&student(20), &not_enrolled, Action::Create).is_allowed());

        // 教师与管理员不提交作业
        assert!(!authorize(&teacher(10), &own, Action::Create).is_allowed());
        assert!(!authorize(&admin(), &own, Action::Create).is_allowed());
    }

    #[test]
    fn grading_restricted_to_author_or_admin() {
        let r = Resource::Submission {
            student_id: 20,
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&teacher(10), &r, Action::Grade).is_allowed());
        assert!(!authorize(&teacher(11), &r, Action::Grade).is_allowed());
        assert!(authorize(&admin(), &r, Action::Grade).is_allowed());
        assert!(!authorize(&student(20), &r, Action::Grade).is_allowed());
    }

    #[test]
    fn submission_read_scoping() {
        let r = Resource::Submission {
            student_id: 20,
            teacher_id: 10,
            enrolled: true,
        };
        assert!(authorize(&student(20), &r, Action::Read).is_allowed());
        assert!(!authorize(&student(21), &r, Action::Read).is_allowed());
        assert!(authorize(&teacher(10), &r, Action::Read).is_allowed());
        assert!(!authorize(&teacher(11), &r, Action::Read).is_allowed());
    }

    #[test]
    fn owned_records_private_even_from_admin() {
        let r = Resource::OwnedRecord { owner_id: 20 };
        assert!(authorize(&student(20), &r, Action::Read).is_allowed());
        assert!(authorize(&student(20), &r, Action::Update).is_allowed());
        assert!(!authorize(&student(21), &r, Action::Read).is_allowed());
        assert!(!authorize(&admin(), &r, Action::Read).is_allowed());
    }

    #[test]
    fn denied_carries_reason() {
        let r = Resource::Class {
            teacher_id: 10,
            enrolled: false,
        };
        match authorize(&student(20), &r, Action::Read) {
            Decision::Denied(reason) => assert!(!reason.is_empty()),
            other => panic!("expected Denied, got {other:?}"),
        }
    }
}
