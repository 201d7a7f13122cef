//! Prompt construction from collected commits

use std::fmt::Write as _;

use gitday_git::RepoResult;

/// Instructions placed before the commit listing
const PREAMBLE: &str = "\
- 프로젝트별로 핵심 작업을 1-2문장으로 요약
- 마지막에 전체적인 한줄 요약 추가
- 한국어로 작성
";

/// Build the summary prompt for the commits collected since `date`
///
/// Repositories and their commit messages appear in input order.
#[must_use]
pub fn build_prompt(results: &[RepoResult], date: &str) -> String {
    let mut prompt = format!(
        "다음은 {date}부터의 개발자 Git 커밋 로그입니다. \
         이 내용을 바탕으로 한 일을 자연어로 간결하게 요약해주세요.\n"
    );
    prompt.push_str(PREAMBLE);
    prompt.push('\n');

    for result in results {
        let _ = writeln!(
            prompt,
            "## {} ({} commits)",
            result.name,
            result.commit_count()
        );
        for commit in &result.commits {
            let _ = writeln!(prompt, "- {}", commit.message);
        }
        prompt.push('\n');
    }

    prompt
}
