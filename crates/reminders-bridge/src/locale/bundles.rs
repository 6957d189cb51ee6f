use super::LocaleBundle;

pub(super) fn english() -> LocaleBundle {
    LocaleBundle::new(
        &[
            "remind me to",
            "add a reminder",
            "what's on my list today",
            "show my reminders for this week",
            "mark the reminder as done",
            "delete the reminder",
        ],
        &[
            ("added", "Added \"{title}\" to Reminders, due {due}."),
            ("added_no_due", "Added \"{title}\" to Reminders."),
            ("repeats", " Repeats {frequency} (interval {interval})."),
            ("updated", "Updated \"{title}\"."),
            ("deleted", "Deleted \"{title}\"."),
            ("completed", "Marked \"{title}\" as completed."),
            ("listed", "Found {count} reminders ({scope})."),
            ("list_empty", "No reminders found ({scope})."),
            ("error_validation", "Invalid request: {detail}"),
            ("error_title_required", "Invalid request: --title is required."),
            ("error_title_empty", "Invalid request: --title cannot be empty."),
            ("error_id_required", "Invalid request: --id is required."),
            (
                "error_repeat_invalid",
                "Invalid request: unsupported repeat \"{value}\" (use daily, weekly, monthly or yearly).",
            ),
            ("error_interval_invalid", "Invalid request: --interval must be at least 1."),
            ("error_not_found", "Could not find a reminder with id {id}."),
            (
                "error_access",
                "There was a problem accessing the Reminders app.",
            ),
            (
                "error_transport",
                "Could not reach the Reminders app. Please try again.",
            ),
            (
                "error_timeout",
                "The Reminders app did not respond within {seconds} seconds.",
            ),
        ],
        &[
            ("title", "Title"),
            ("due", "Due"),
            ("note", "Note"),
            ("completed", "Completed"),
            ("repeat", "Repeat"),
            ("no_due", "No due date"),
            ("scope", "Scope"),
            ("scope_today", "today"),
            ("scope_week", "this week"),
            ("scope_all", "all"),
            ("daily", "daily"),
            ("weekly", "weekly"),
            ("monthly", "monthly"),
            ("yearly", "yearly"),
        ],
    )
}

pub(super) fn korean() -> LocaleBundle {
    LocaleBundle::new(
        &[
            "미리 알림 추가해줘",
            "리마인더 등록해줘",
            "오늘 할 일 보여줘",
            "이번 주 미리 알림 알려줘",
            "미리 알림 완료 처리해줘",
            "미리 알림 삭제해줘",
        ],
        &[
            ("added", "\"{title}\" 미리 알림을 추가했습니다. 마감: {due}"),
            ("added_no_due", "\"{title}\" 미리 알림을 추가했습니다."),
            ("repeats", " 반복: {frequency} (간격 {interval})."),
            ("updated", "\"{title}\" 미리 알림을 수정했습니다."),
            ("deleted", "\"{title}\" 미리 알림을 삭제했습니다."),
            ("completed", "\"{title}\" 미리 알림을 완료했습니다."),
            ("listed", "미리 알림 {count}개를 찾았습니다 ({scope})."),
            ("list_empty", "미리 알림이 없습니다 ({scope})."),
            ("error_validation", "잘못된 요청입니다."),
            ("error_title_required", "잘못된 요청입니다: --title 값이 필요합니다."),
            ("error_title_empty", "잘못된 요청입니다: --title은 비워 둘 수 없습니다."),
            ("error_id_required", "잘못된 요청입니다: --id 값이 필요합니다."),
            (
                "error_repeat_invalid",
                "잘못된 요청입니다: 지원하지 않는 반복 주기 \"{value}\"입니다 (daily, weekly, monthly, yearly 중 하나).",
            ),
            ("error_interval_invalid", "잘못된 요청입니다: --interval은 1 이상이어야 합니다."),
            ("error_not_found", "ID가 {id}인 미리 알림을 찾을 수 없습니다."),
            (
                "error_access",
                "미리 알림 앱에 접근하는 중 문제가 발생했습니다.",
            ),
            (
                "error_transport",
                "미리 알림 앱과 통신할 수 없습니다. 다시 시도해 주세요.",
            ),
            (
                "error_timeout",
                "미리 알림 앱이 {seconds}초 안에 응답하지 않았습니다.",
            ),
        ],
        &[
            ("title", "제목"),
            ("due", "마감"),
            ("note", "메모"),
            ("completed", "완료"),
            ("repeat", "반복"),
            ("no_due", "마감일 없음"),
            ("scope", "범위"),
            ("scope_today", "오늘"),
            ("scope_week", "이번 주"),
            ("scope_all", "전체"),
            ("daily", "매일"),
            ("weekly", "매주"),
            ("monthly", "매월"),
            ("yearly", "매년"),
        ],
    )
}

pub(super) fn japanese() -> LocaleBundle {
    LocaleBundle::new(
        &[
            "リマインダーを追加して",
            "今日のリマインダーを見せて",
            "今週の予定を教えて",
            "リマインダーを完了にして",
            "リマインダーを削除して",
        ],
        &[
            ("added", "リマインダー「{title}」を追加しました（期限: {due}）。"),
            ("added_no_due", "リマインダー「{title}」を追加しました。"),
            ("repeats", "繰り返し: {frequency}（間隔 {interval}）。"),
            ("updated", "リマインダー「{title}」を更新しました。"),
            ("deleted", "リマインダー「{title}」を削除しました。"),
            ("completed", "リマインダー「{title}」を完了にしました。"),
            ("listed", "{count} 件のリマインダーが見つかりました（{scope}）。"),
            ("list_empty", "リマインダーはありません（{scope}）。"),
            ("error_validation", "リクエストが正しくありません。"),
            ("error_title_required", "リクエストが正しくありません: --title を指定してください。"),
            ("error_title_empty", "リクエストが正しくありません: --title を空にはできません。"),
            ("error_id_required", "リクエストが正しくありません: --id を指定してください。"),
            (
                "error_repeat_invalid",
                "リクエストが正しくありません: 繰り返し「{value}」には対応していません（daily、weekly、monthly、yearly のいずれか）。",
            ),
            ("error_interval_invalid", "リクエストが正しくありません: --interval は 1 以上にしてください。"),
            ("error_not_found", "ID {id} のリマインダーが見つかりません。"),
            (
                "error_access",
                "リマインダーアプリへのアクセスで問題が発生しました。",
            ),
            (
                "error_transport",
                "リマインダーアプリと通信できませんでした。もう一度お試しください。",
            ),
            (
                "error_timeout",
                "リマインダーアプリが {seconds} 秒以内に応答しませんでした。",
            ),
        ],
        &[
            ("title", "タイトル"),
            ("due", "期限"),
            ("note", "メモ"),
            ("completed", "完了"),
            ("repeat", "繰り返し"),
            ("no_due", "期限なし"),
            ("scope", "範囲"),
            ("scope_today", "今日"),
            ("scope_week", "今週"),
            ("scope_all", "すべて"),
            ("daily", "毎日"),
            ("weekly", "毎週"),
            ("monthly", "毎月"),
            ("yearly", "毎年"),
        ],
    )
}

pub(super) fn chinese() -> LocaleBundle {
    LocaleBundle::new(
        &[
            "添加一个提醒",
            "提醒我",
            "看看今天的提醒事项",
            "这周有什么提醒",
            "把提醒标记为完成",
            "删除提醒",
        ],
        &[
            ("added", "已添加提醒事项“{title}”，截止时间：{due}。"),
            ("added_no_due", "已添加提醒事项“{title}”。"),
            ("repeats", "重复：{frequency}（间隔 {interval}）。"),
            ("updated", "已更新提醒事项“{title}”。"),
            ("deleted", "已删除提醒事项“{title}”。"),
            ("completed", "已将提醒事项“{title}”标记为完成。"),
            ("listed", "找到 {count} 条提醒事项（{scope}）。"),
            ("list_empty", "没有提醒事项（{scope}）。"),
            ("error_validation", "请求无效。"),
            ("error_title_required", "请求无效：需要提供 --title。"),
            ("error_title_empty", "请求无效：--title 不能为空。"),
            ("error_id_required", "请求无效：需要提供 --id。"),
            (
                "error_repeat_invalid",
                "请求无效：不支持的重复频率“{value}”（可用 daily、weekly、monthly、yearly）。",
            ),
            ("error_interval_invalid", "请求无效：--interval 必须至少为 1。"),
            ("error_not_found", "找不到 ID 为 {id} 的提醒事项。"),
            ("error_access", "访问提醒事项应用时出现问题。"),
            ("error_transport", "无法与提醒事项应用通信，请重试。"),
            ("error_timeout", "提醒事项应用在 {seconds} 秒内没有响应。"),
        ],
        &[
            ("title", "标题"),
            ("due", "截止"),
            ("note", "备注"),
            ("completed", "已完成"),
            ("repeat", "重复"),
            ("no_due", "无截止日期"),
            ("scope", "范围"),
            ("scope_today", "今天"),
            ("scope_week", "本周"),
            ("scope_all", "全部"),
            ("daily", "每天"),
            ("weekly", "每周"),
            ("monthly", "每月"),
            ("yearly", "每年"),
        ],
    )
}
