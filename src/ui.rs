pub fn render_index(date: &str, completed: bool, current_streak: u32, longest_streak: u32) -> String {
    let status = if completed { "Completed" } else { "Not completed" };
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{DAY_STATUS}}", status)
        .replace("{{CURRENT}}", &current_streak.to_string())
        .replace("{{LONGEST}}", &longest_streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Consistency Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f0;
      --bg-2: #cfe3d4;
      --ink: #23302a;
      --accent: #e0663a;
      --accent-2: #2d5d46;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(45, 93, 70, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3efe2 60%, #f2f6ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6a60;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(45, 93, 70, 0.1);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8a80;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .stat .value.day-status {
      font-size: 1.15rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(45, 93, 70, 0.08);
      border-radius: 999px;
    }

    .tab {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #64705f;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(45, 93, 70, 0.12);
    }

    .tab-pane {
      display: none;
    }

    .tab-pane.active {
      display: grid;
      gap: 20px;
    }

    form {
      display: grid;
      gap: 14px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.9rem;
      font-weight: 600;
      color: #4c5a50;
    }

    .field input[type="number"],
    .field input[type="text"],
    .field input[type="url"],
    .field textarea {
      font: inherit;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid rgba(45, 93, 70, 0.2);
      background: white;
    }

    .field textarea {
      min-height: 72px;
      resize: vertical;
    }

    .toggle {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 0.95rem;
      color: #4c5a50;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(224, 102, 58, 0.3);
      transition: transform 150ms ease;
    }

    button.primary:active {
      transform: scale(0.98);
    }

    button.primary:disabled {
      opacity: 0.6;
      cursor: default;
    }

    button.ghost {
      appearance: none;
      border: 1px solid rgba(45, 93, 70, 0.25);
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: white;
      color: var(--accent-2);
    }

    .list {
      display: grid;
      gap: 12px;
    }

    .entry {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(45, 93, 70, 0.1);
      display: grid;
      gap: 6px;
    }

    .entry .entry-date {
      font-weight: 600;
      color: var(--accent-2);
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .entry .badge {
      font-size: 0.75rem;
      font-weight: 600;
      padding: 2px 10px;
      border-radius: 999px;
      background: rgba(224, 102, 58, 0.14);
      color: var(--accent);
    }

    .entry .detail {
      font-size: 0.92rem;
      color: #4c5a50;
    }

    .entry .detail a {
      color: var(--accent-2);
    }

    .entry .section-title {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7d8a80;
      margin-top: 4px;
    }

    .gate {
      font-size: 0.95rem;
      color: #4c5a50;
    }

    .gate.unlocked {
      color: #2d7a4b;
      font-weight: 600;
    }

    .backup {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    .empty {
      text-align: center;
      color: #7d8a80;
      font-size: 0.95rem;
    }

    .status {
      font-size: 0.95rem;
      color: #64705f;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6c7a6e;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button.primary {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Consistency Tracker</h1>
      <p class="subtitle">One honest check-in per day. Streaks take care of themselves.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value day-status">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Today</span>
        <span id="day-status" class="value day-status">{{DAY_STATUS}}</span>
      </div>
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value streak">{{CURRENT}}</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest-streak" class="value">{{LONGEST}}</span>
      </div>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="daily" role="tab" aria-selected="true">Daily check-in</button>
      <button class="tab" type="button" data-tab="history" role="tab" aria-selected="false">History</button>
      <button class="tab" type="button" data-tab="review" role="tab" aria-selected="false">Weekly review</button>
    </div>

    <section class="tab-pane active" data-pane="daily">
      <form id="checkin-form">
        <div class="field">
          <label for="hours">Hours studied</label>
          <input id="hours" name="hours" type="number" step="0.1" min="0.5" max="24" placeholder="2.5" required />
        </div>
        <div class="field">
          <label for="topic">Topic</label>
          <input id="topic" name="topic" type="text" placeholder="What did you work on?" />
        </div>
        <div class="field">
          <label for="proof">Proof link</label>
          <input id="proof" name="proof" type="text" placeholder="Link to notes, commit, exercise..." />
        </div>
        <label class="toggle">
          <input id="low-energy" type="checkbox" />
          Low Energy Day (1-2 hours counts)
        </label>
        <button class="primary" id="checkin-submit" type="submit">Complete today's check-in</button>
      </form>
    </section>

    <section class="tab-pane" data-pane="history">
      <div class="panel">
        <div class="stat">
          <span class="label">Total days</span>
          <span id="total-days" class="value">0</span>
        </div>
        <div class="stat">
          <span class="label">Total hours</span>
          <span id="total-hours" class="value">0</span>
        </div>
        <div class="stat">
          <span class="label">Avg hours/day</span>
          <span id="avg-hours" class="value">0</span>
        </div>
      </div>
      <div id="history-list" class="list"></div>
    </section>

    <section class="tab-pane" data-pane="review">
      <p id="review-gate" class="gate"></p>
      <form id="review-form">
        <div class="field">
          <label for="improved">What improved this week?</label>
          <textarea id="improved"></textarea>
        </div>
        <div class="field">
          <label for="challenges">What was hard?</label>
          <textarea id="challenges"></textarea>
        </div>
        <div class="field">
          <label for="next-week">Focus for next week</label>
          <textarea id="next-week"></textarea>
        </div>
        <button class="primary" type="submit">Save weekly review</button>
      </form>
      <div id="reviews-list" class="list"></div>
    </section>

    <section class="backup">
      <button class="ghost" id="export-btn" type="button">Export backup</button>
      <button class="ghost" id="import-btn" type="button">Import backup</button>
      <input id="import-file" type="file" accept="application/json" hidden />
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Days are kept per calendar day (UTC, server time). Re-submitting today replaces today's entry.</p>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const dayStatusEl = document.getElementById('day-status');
    const currentStreakEl = document.getElementById('current-streak');
    const longestStreakEl = document.getElementById('longest-streak');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panes = Array.from(document.querySelectorAll('.tab-pane'));

    const checkinForm = document.getElementById('checkin-form');
    const checkinSubmit = document.getElementById('checkin-submit');
    const hoursInput = document.getElementById('hours');
    const lowEnergyInput = document.getElementById('low-energy');

    const totalDaysEl = document.getElementById('total-days');
    const totalHoursEl = document.getElementById('total-hours');
    const avgHoursEl = document.getElementById('avg-hours');
    const historyListEl = document.getElementById('history-list');

    const reviewGateEl = document.getElementById('review-gate');
    const reviewForm = document.getElementById('review-form');
    const reviewsListEl = document.getElementById('reviews-list');

    const exportBtn = document.getElementById('export-btn');
    const importBtn = document.getElementById('import-btn');
    const importFile = document.getElementById('import-file');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flash = (message, type) => {
      setStatus(message, type);
      setTimeout(() => setStatus('', ''), 2500);
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panes.forEach((pane) => {
        pane.classList.toggle('active', pane.dataset.pane === tab);
      });
    };

    const updateStatusPanel = (data) => {
      dateEl.textContent = data.date;
      dayStatusEl.textContent = data.completed_today ? 'Completed' : 'Not completed';
      currentStreakEl.textContent = data.current_streak;
      longestStreakEl.textContent = data.longest_streak;
      checkinSubmit.textContent = data.completed_today
        ? 'Update today’s check-in'
        : (lowEnergyInput.checked ? 'Complete Low Energy Day' : 'Complete today’s check-in');
    };

    const loadStatus = async () => {
      const res = await fetch('/api/status');
      if (!res.ok) {
        throw new Error('Unable to load status');
      }
      updateStatusPanel(await res.json());
    };

    const detail = (label, value) => {
      const line = document.createElement('div');
      line.className = 'detail';
      const strong = document.createElement('strong');
      strong.textContent = label + ': ';
      line.appendChild(strong);
      line.appendChild(document.createTextNode(value));
      return line;
    };

    const renderHistory = (data) => {
      totalDaysEl.textContent = data.total_days;
      totalHoursEl.textContent = data.total_hours.toFixed(1);
      avgHoursEl.textContent = data.avg_hours.toFixed(1);

      historyListEl.innerHTML = '';
      if (!data.entries.length) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = 'No check-ins yet. Start your journey today!';
        historyListEl.appendChild(empty);
        return;
      }

      data.entries.slice(0, 30).forEach((entry) => {
        const item = document.createElement('div');
        item.className = 'entry';

        const header = document.createElement('div');
        header.className = 'entry-date';
        header.textContent = entry.date;
        if (entry.isLowEnergy) {
          const badge = document.createElement('span');
          badge.className = 'badge';
          badge.textContent = 'Low Energy';
          header.appendChild(badge);
        }
        item.appendChild(header);

        item.appendChild(detail('Hours', entry.hours + 'h'));
        if (entry.topic) {
          item.appendChild(detail('Topic', entry.topic));
        }
        if (entry.proof) {
          const line = document.createElement('div');
          line.className = 'detail';
          const strong = document.createElement('strong');
          strong.textContent = 'Proof: ';
          const link = document.createElement('a');
          link.href = entry.proof;
          link.target = '_blank';
          link.rel = 'noopener';
          link.textContent = 'View proof';
          line.appendChild(strong);
          line.appendChild(link);
          item.appendChild(line);
        }

        historyListEl.appendChild(item);
      });
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      renderHistory(await res.json());
    };

    const renderReviews = (data) => {
      if (data.unlocked) {
        reviewGateEl.textContent = 'You can complete your weekly review!';
        reviewGateEl.classList.add('unlocked');
        reviewForm.style.display = '';
      } else {
        reviewGateEl.textContent =
          'Complete ' + data.days_remaining + ' more days this week to unlock your weekly review.';
        reviewGateEl.classList.remove('unlocked');
        reviewForm.style.display = 'none';
      }

      reviewsListEl.innerHTML = '';
      if (!data.reviews.length) {
        const empty = document.createElement('p');
        empty.className = 'empty';
        empty.textContent = 'No reviews yet. Complete 7 days to write your first review!';
        reviewsListEl.appendChild(empty);
        return;
      }

      data.reviews.forEach((review) => {
        const item = document.createElement('div');
        item.className = 'entry';

        const header = document.createElement('div');
        header.className = 'entry-date';
        header.textContent = 'Week ending ' + review.weekEnding;
        item.appendChild(header);

        const sections = [
          ['What improved', review.improved],
          ['Challenges', review.challenges],
          ['Next week focus', review.nextWeek]
        ];
        sections.forEach(([title, text]) => {
          const heading = document.createElement('div');
          heading.className = 'section-title';
          heading.textContent = title;
          item.appendChild(heading);
          const body = document.createElement('div');
          body.className = 'detail';
          body.textContent = text;
          item.appendChild(body);
        });

        reviewsListEl.appendChild(item);
      });
    };

    const loadReviews = async () => {
      const res = await fetch('/api/reviews');
      if (!res.ok) {
        throw new Error('Unable to load reviews');
      }
      renderReviews(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadStatus(), loadHistory(), loadReviews()]);
    };

    lowEnergyInput.addEventListener('change', () => {
      if (lowEnergyInput.checked) {
        hoursInput.min = '1';
        hoursInput.max = '2';
        hoursInput.placeholder = '1.5';
        checkinSubmit.textContent = 'Complete Low Energy Day';
      } else {
        hoursInput.min = '0.5';
        hoursInput.max = '24';
        hoursInput.placeholder = '2.5';
        checkinSubmit.textContent = 'Complete today’s check-in';
      }
    });

    checkinForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', '');
      try {
        const res = await fetch('/api/checkin', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            hours: parseFloat(hoursInput.value),
            topic: document.getElementById('topic').value,
            proof: document.getElementById('proof').value,
            isLowEnergy: lowEnergyInput.checked
          })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Check-in failed');
        }
        checkinForm.reset();
        await refresh();
        flash('Daily check-in completed!', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    reviewForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', '');
      try {
        const res = await fetch('/api/review', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            improved: document.getElementById('improved').value,
            challenges: document.getElementById('challenges').value,
            nextWeek: document.getElementById('next-week').value
          })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Review failed');
        }
        reviewForm.reset();
        await loadReviews();
        flash('Weekly review saved!', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    exportBtn.addEventListener('click', async () => {
      try {
        const res = await fetch('/api/export');
        if (!res.ok) {
          throw new Error('Export failed');
        }
        const blob = new Blob([JSON.stringify(await res.json(), null, 2)], {
          type: 'application/json'
        });
        const url = URL.createObjectURL(blob);
        const link = document.createElement('a');
        link.href = url;
        link.download = 'consistency-tracker-backup-' + dateEl.textContent + '.json';
        link.click();
        URL.revokeObjectURL(url);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    importBtn.addEventListener('click', () => importFile.click());

    importFile.addEventListener('change', async () => {
      const file = importFile.files[0];
      if (!file) {
        return;
      }
      try {
        const res = await fetch('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: await file.text()
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Import failed');
        }
        await refresh();
        flash('Data imported successfully!', 'ok');
      } catch (err) {
        setStatus('Error importing data: ' + err.message, 'error');
      } finally {
        importFile.value = '';
      }
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
