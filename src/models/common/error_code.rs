use serde::{Deserialize, Serialize};

// 业务错误码，随 ApiResponse 返回给客户端
//
// 分组：1xxxx 认证，2xxxx 用户，3xxxx 班级/选课，
//       4xxxx 课程内容（资料/作业/提交），5xxxx 日程，9xxxx 通用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 认证
    Unauthorized = 10001,
    AuthFailed = 10002,
    TokenInvalid = 10003,
    RegisterFailed = 10004,
    Forbidden = 10005,

    // 用户
    UserNotFound = 20001,
    UserAlreadyExists = 20002,
    UserEmailInvalid = 20003,
    UserNameInvalid = 20004,
    UserCreationFailed = 20005,
    UserUpdateFailed = 20006,
    PasswordTooWeak = 20007,

    // 班级与选课
    ClassNotFound = 30001,
    ClassCreationFailed = 30002,
    ClassUpdateFailed = 30003,
    StudentNotFound = 30004,
    AlreadyEnrolled = 30005,
    EnrollmentFailed = 30006,

    // 课程内容
    MaterialNotFound = 40001,
    AssignmentNotFound = 40002,
    SubmissionNotFound = 40003,
    GradeOutOfRange = 40004,
    FileUploadFailed = 40005,
    FileTypeNotAllowed = 40006,
    FileSizeExceeded = 40007,
    MultifileUploadNotAllowed = 40008,
    FileNotFound = 40009,
    AlreadySubmitted = 40010,

    // 日程与个人记录
    SessionNotFound = 50001,
    NoteNotFound = 50002,
    EventNotFound = 50003,
    InvalidTimeRange = 50004,

    // 通用
    ValidationFailed = 90001,
    InternalServerError = 99999,
}
