use crate::models::CourseStats;

pub fn render_index(rows: &[CourseStats]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    INDEX_HTML.replace("{{ROWS}}", &body)
}

fn render_row(row: &CourseStats) -> String {
    let status_class = if row.below_threshold { "status-bad" } else { "status-ok" };
    let index = row.index;
    format!(
        r#"<tr data-index="{index}">
          <td data-label="Course"><input class="label-input" type="text" data-field="courseCode" value="{label}" /></td>
          <td data-label="Conducted">{conducted}</td>
          <td data-label="Absent">{absent}</td>
          <td data-label="Current %" class="current">{current}</td>
          <td data-label="Status" class="status-cell {status_class}">{status}</td>
          <td data-label="Projected %" class="projected">{projected}</td>
        </tr>
"#,
        label = escape_html(&row.record.course_label),
        conducted = render_counter(index, "conducted", row.record.conducted_count),
        absent = render_counter(index, "absent", row.record.absent_count),
        current = row.current,
        status = row.status,
        projected = row.projected,
    )
}

fn render_counter(index: usize, field: &str, value: u32) -> String {
    format!(
        r#"<div class="counter">
            <button class="btn-step dec" type="button" data-index="{index}" data-field="{field}" data-delta="-1">-</button>
            <input class="count-input" type="text" inputmode="numeric" data-field="{field}" value="{value}" />
            <button class="btn-step inc" type="button" data-index="{index}" data-field="{field}" data-delta="1">+</button>
          </div>"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Skip Calculator</title>
  <style>
    :root {
      --bg: #eef1f5;
      --ink: #22262b;
      --ok: #2d7a4b;
      --bad: #c63b2b;
      --accent: #2459c7;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(34, 38, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 24px 16px 48px;
    }

    h1 {
      text-align: center;
      font-size: clamp(1.3rem, 3vw, 1.8rem);
      margin: 0 0 24px;
    }

    table {
      width: min(1080px, 100%);
      margin: 0 auto;
      border-collapse: collapse;
      background: var(--card);
      border-radius: 14px;
      overflow: hidden;
      box-shadow: var(--shadow);
    }

    th, td {
      border: 1px solid #d5dae1;
      padding: 8px;
      text-align: center;
    }

    thead {
      background: #dde2e9;
    }

    .counter {
      display: inline-flex;
      align-items: center;
      gap: 6px;
    }

    .count-input {
      width: 4rem;
      text-align: center;
    }

    .label-input {
      width: 100%;
    }

    input {
      border: 1px solid #c3c9d1;
      border-radius: 6px;
      padding: 4px 6px;
      font: inherit;
    }

    input.invalid {
      border-color: var(--bad);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 6px;
      color: white;
      font-weight: 600;
      cursor: pointer;
      padding: 4px 10px;
    }

    .btn-step.dec {
      background: #d9534f;
    }

    .btn-step.inc {
      background: #3a9d5d;
    }

    .status-ok {
      color: var(--ok);
      font-weight: 700;
    }

    .status-bad {
      color: var(--bad);
      font-weight: 700;
    }

    .footer {
      display: grid;
      justify-items: center;
      gap: 10px;
      margin-top: 24px;
    }

    .btn-save {
      background: var(--accent);
      padding: 10px 28px;
      border-radius: 10px;
      box-shadow: 0 8px 18px rgba(36, 89, 199, 0.3);
    }

    .notice {
      min-height: 1.2em;
      color: #5c636b;
    }

    .notice[data-type="failure"] {
      color: var(--bad);
    }

    .notice[data-type="success"] {
      color: var(--ok);
    }

    @media (max-width: 640px) {
      thead {
        display: none;
      }
      table, tbody, tr, td {
        display: block;
        width: 100%;
      }
      tr {
        margin-bottom: 16px;
        border-radius: 10px;
        box-shadow: var(--shadow);
      }
      td {
        display: flex;
        justify-content: space-between;
        align-items: center;
        border: none;
        border-bottom: 1px solid #eceff3;
      }
      td::before {
        content: attr(data-label);
        font-weight: 600;
        margin-right: 12px;
      }
    }
  </style>
</head>
<body>
  <h1>Attendance Skip Calculator</h1>

  <table>
    <thead>
      <tr>
        <th>Course Code</th>
        <th>Conducted</th>
        <th>Absent</th>
        <th>Current %</th>
        <th>Max Skips / Needed</th>
        <th>Projected %</th>
      </tr>
    </thead>
    <tbody id="rows">
{{ROWS}}    </tbody>
  </table>

  <div class="footer">
    <button class="btn-save" id="save-btn" type="button">Save</button>
    <div class="notice" id="notice"></div>
  </div>

  <script>
    const rowsEl = document.getElementById('rows');
    const noticeEl = document.getElementById('notice');
    const saveBtn = document.getElementById('save-btn');

    const setNotice = (message, type) => {
      noticeEl.textContent = message;
      noticeEl.dataset.type = type || '';
    };

    const rowFor = (index) => rowsEl.querySelector(`tr[data-index="${index}"]`);

    const applyStats = (stats) => {
      const row = rowFor(stats.index);
      if (!row) {
        return;
      }
      row.querySelector('[data-field="courseCode"]').value = stats.record.courseCode;
      row.querySelector('.count-input[data-field="conducted"]').value = stats.record.conducted;
      row.querySelector('.count-input[data-field="absent"]').value = stats.record.absent;
      row.querySelector('.current').textContent = stats.current;
      row.querySelector('.projected').textContent = stats.projected;
      const statusEl = row.querySelector('.status-cell');
      statusEl.textContent = stats.status;
      statusEl.classList.toggle('status-bad', stats.below_threshold);
      statusEl.classList.toggle('status-ok', !stats.below_threshold);
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      return res;
    };

    const edit = async (index, path, body, input) => {
      const res = await post(`/api/records/${index}/${path}`, body);
      if (!res.ok) {
        const msg = await res.text();
        if (input) {
          input.classList.add('invalid');
        }
        throw new Error(msg || 'Update failed');
      }
      if (input) {
        input.classList.remove('invalid');
      }
      applyStats(await res.json());
    };

    rowsEl.addEventListener('click', (event) => {
      const button = event.target.closest('.btn-step');
      if (!button) {
        return;
      }
      const { index, field, delta } = button.dataset;
      edit(index, 'adjust', { field, delta: Number(delta) })
        .catch((err) => setNotice(err.message, 'failure'));
    });

    rowsEl.addEventListener('change', (event) => {
      const input = event.target.closest('input');
      if (!input) {
        return;
      }
      const index = input.closest('tr').dataset.index;
      edit(index, 'field', { field: input.dataset.field, value: input.value }, input)
        .catch((err) => setNotice(err.message, 'failure'));
    });

    saveBtn.addEventListener('click', async () => {
      setNotice('Saving...', '');
      try {
        const res = await post('/api/save');
        const notification = await res.json();
        setNotice(notification.message, notification.level);
      } catch (err) {
        setNotice('Error saving attendance', 'failure');
      }
    });

    fetch('/api/records')
      .then((res) => res.json())
      .then((rows) => rows.forEach(applyStats))
      .catch((err) => setNotice(err.message, 'failure'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{DEFAULT_COURSES, seed_records};
    use crate::models::CourseAttendanceRecord;
    use crate::stats::{build_course_stats, course_stats};

    #[test]
    fn index_lists_every_course() {
        let html = render_index(&build_course_stats(&seed_records(DEFAULT_COURSES)));
        assert!(!html.contains("{{ROWS}}"));
        for seed in DEFAULT_COURSES {
            assert!(html.contains(seed.label));
        }
        assert!(html.contains("Can skip 4 classes"));
    }

    #[test]
    fn course_labels_are_escaped() {
        let row = course_stats(0, &CourseAttendanceRecord::new("<b>\"Labs\"</b>", 4, 0));
        let html = render_index(&[row]);
        assert!(html.contains("&lt;b&gt;&quot;Labs&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>\"Labs\""));
    }
}
